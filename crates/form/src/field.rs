use folio_contact::{Field, MAX_EMAIL_LENGTH, MAX_MESSAGE_LENGTH};
use strum::{AsRefStr, Display};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

/// Static description of one contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub required: bool,
    pub auto_complete: Option<&'static str>,
    /// Rendered off-screen; only bots fill it in.
    pub honeypot: bool,
}

pub const HONEYPOT_FIELD: FormField = FormField {
    name: "name",
    label: "Name",
    kind: FieldKind::Text,
    max_length: Some(MAX_EMAIL_LENGTH),
    required: false,
    auto_complete: Some("off"),
    honeypot: true,
};

pub const EMAIL_FIELD: FormField = FormField {
    name: "email",
    label: "Your email",
    kind: FieldKind::Email,
    max_length: Some(MAX_EMAIL_LENGTH),
    required: true,
    auto_complete: Some("email"),
    honeypot: false,
};

pub const MESSAGE_FIELD: FormField = FormField {
    name: "message",
    label: "Message",
    kind: FieldKind::TextArea,
    max_length: Some(MAX_MESSAGE_LENGTH),
    required: true,
    auto_complete: Some("off"),
    honeypot: false,
};

pub static CONTACT_FIELDS: [FormField; 3] = [HONEYPOT_FIELD, EMAIL_FIELD, MESSAGE_FIELD];

impl FormField {
    pub fn find(name: &str) -> Option<&'static FormField> {
        CONTACT_FIELDS.iter().find(|field| field.name == name)
    }

    /// The validated field this input maps to, if any.
    pub fn field(&self) -> Option<Field> {
        self.name.parse().ok().filter(|_| !self.honeypot)
    }

    /// Apply `max_length` the way a browser `maxlength` attribute does.
    pub fn clamp(&self, value: &str) -> String {
        match self.max_length {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_owned(),
        }
    }
}

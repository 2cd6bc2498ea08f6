use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{Field, ValidationErrors};

pub const MAX_EMAIL_LENGTH: usize = 512;
pub const MAX_MESSAGE_LENGTH: usize = 4096;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.{2,}\..{2,}").expect("email pattern is valid"));

const CODE_TOO_LONG: &str = "too_long";
const CODE_REQUIRED: &str = "required";

/// Fields posted by the contact form. `name` is the hidden honeypot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_empty"),
        length(max = 512, code = "too_long"),
        regex(path = *EMAIL_REGEX, code = "invalid")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "not_empty"), length(max = 4096, code = "too_long"))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_bot(&self) -> bool {
        !self.name.is_empty()
    }

    /// Runs every field rule and keeps one message per failing field.
    pub fn field_errors(&self) -> ValidationErrors {
        match self.validate() {
            Ok(()) => ValidationErrors::default(),
            Err(errors) => errors.into(),
        }
    }
}

fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(CODE_REQUIRED));
    }

    Ok(())
}

fn rank(code: &str) -> u8 {
    match code {
        CODE_TOO_LONG => 2,
        CODE_REQUIRED => 1,
        _ => 0,
    }
}

pub fn field_message(field: Field, code: &str) -> String {
    match (field, code) {
        (Field::Email, CODE_TOO_LONG) => {
            format!("Email address must be shorter than {MAX_EMAIL_LENGTH} characters.")
        }
        (Field::Email, _) => "Please enter a valid email address.".to_owned(),
        (Field::Message, CODE_TOO_LONG) => {
            format!("Message must be shorter than {MAX_MESSAGE_LENGTH} characters.")
        }
        (Field::Message, _) => "Please enter a message.".to_owned(),
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(value: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::default();

        for (name, field_errors) in value.field_errors() {
            let Ok(field) = Field::from_str(&name) else {
                continue;
            };

            let Some(worst) = field_errors.iter().max_by_key(|e| rank(&e.code)) else {
                continue;
            };

            errors.insert(field, field_message(field, &worst.code));
        }

        errors
    }
}

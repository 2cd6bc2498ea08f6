use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::DeliveryErrorKind;

pub const CONFIGURATION_ERROR_MESSAGE: &str = "Server configuration error. Please try again later.";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Message,
}

/// Per-field validation messages. An absent field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Configuration,
    Delivery(DeliveryErrorKind),
}

impl FailureKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureKind::Configuration => CONFIGURATION_ERROR_MESSAGE,
            FailureKind::Delivery(kind) => kind.user_message(),
        }
    }
}

/// Outcome of one contact submission.
///
/// On the wire this is `{"success":true}` or `{"errors":{...}}`, where a
/// failure carries a single `message` key instead of field keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Sent,
    Invalid(ValidationErrors),
    Failed(FailureKind),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Sent)
    }

    pub fn has_errors(&self) -> bool {
        !self.is_success()
    }

    /// Configuration and delivery failures are served with a 500 status.
    pub fn is_failure(&self) -> bool {
        matches!(self, SubmissionResult::Failed(_))
    }

    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmissionResult::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// The `errors.message` value as a client reads it from the wire.
    pub fn errors_message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Sent => None,
            SubmissionResult::Invalid(errors) => errors.get(Field::Message),
            SubmissionResult::Failed(kind) => Some(kind.user_message()),
        }
    }
}

#[derive(Serialize)]
struct FailureBody {
    message: &'static str,
}

impl Serialize for SubmissionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            SubmissionResult::Sent => map.serialize_entry("success", &true)?,
            SubmissionResult::Invalid(errors) => map.serialize_entry("errors", errors)?,
            SubmissionResult::Failed(kind) => map.serialize_entry(
                "errors",
                &FailureBody {
                    message: kind.user_message(),
                },
            )?,
        }
        map.end()
    }
}

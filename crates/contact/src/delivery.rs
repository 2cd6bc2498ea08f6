use std::{fmt, time::Duration};

use askama::Template;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::ContactSubmission;

/// Settings for relaying contact messages. Built once at startup and handed
/// to every submission so a missing value surfaces per request.
#[derive(Clone, Deserialize)]
pub struct DeliveryConfig {
    /// Operator address every message is delivered to.
    #[serde(default)]
    pub recipient: String,
    /// Verified sender address.
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_smtp_tls")]
    pub smtp_tls: bool,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            sender: String::new(),
            smtp_host: String::new(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_tls: default_smtp_tls(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_tls() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// A setting counts as present once it has non-whitespace content.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

impl DeliveryConfig {
    /// Required settings by name, in reporting order.
    pub fn required_settings(&self) -> [(&'static str, &str); 5] {
        [
            ("recipient", self.recipient.as_str()),
            ("sender", self.sender.as_str()),
            ("smtp_host", self.smtp_host.as_str()),
            ("smtp_username", self.smtp_username.as_str()),
            ("smtp_password", self.smtp_password.as_str()),
        ]
    }

    /// Names of required settings that are blank.
    pub fn missing(&self) -> Vec<&'static str> {
        self.required_settings()
            .into_iter()
            .filter(|(_, value)| !is_present(value))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn has_credentials(&self) -> bool {
        is_present(&self.smtp_username) && is_present(&self.smtp_password)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("recipient", &self.recipient)
            .field("sender", &self.sender)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .field("smtp_tls", &self.smtp_tls)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Template)]
#[template(path = "message.txt")]
struct MessageTemplate<'a> {
    email: &'a str,
    message: &'a str,
}

/// A single outgoing message as handed to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub destination: Vec<String>,
    pub source: String,
    pub reply_to: Vec<String>,
    pub subject: String,
    pub body_text: String,
}

impl DeliveryRequest {
    pub fn for_submission(
        submission: &ContactSubmission,
        config: &DeliveryConfig,
    ) -> Result<Self, askama::Error> {
        let body_text = MessageTemplate {
            email: &submission.email,
            message: &submission.message,
        }
        .render()?;

        Ok(Self {
            destination: vec![config.recipient.to_owned()],
            source: config.sender.to_owned(),
            reply_to: vec![submission.email.to_owned()],
            subject: format!("New message from {}", submission.email),
            body_text,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageId(pub String);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized classification of a delivery failure, whatever the provider.
#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DeliveryErrorKind {
    MessageRejected,
    SendingPaused,
    InvalidParameter,
    CredentialsError,
    Unknown,
}

impl DeliveryErrorKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            DeliveryErrorKind::MessageRejected => {
                "Your message was rejected by the mail server. Please check your email address and try again."
            }
            DeliveryErrorKind::SendingPaused => {
                "Email sending is temporarily paused. Please try again later."
            }
            DeliveryErrorKind::InvalidParameter => {
                "Your message could not be sent because of an invalid parameter. Please check your input and try again."
            }
            DeliveryErrorKind::CredentialsError => {
                "Authentication error. Please contact the site owner directly."
            }
            DeliveryErrorKind::Unknown => "Failed to send message. Please try again later.",
        }
    }
}

/// Provider failure. `detail` is for logs only and never reaches a client.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct DeliveryError {
    pub kind: DeliveryErrorKind,
    pub detail: String,
}

impl DeliveryError {
    pub fn new(kind: DeliveryErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, request: DeliveryRequest) -> Result<MessageId, DeliveryError>;
}

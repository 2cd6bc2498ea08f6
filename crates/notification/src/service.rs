//! Contact message delivery over SMTP using lettre

use folio_contact::{
    DeliveryConfig, DeliveryError, DeliveryErrorKind, DeliveryRequest, Mailer, MessageId,
    is_present,
};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

/// [`Mailer`] backed by an async SMTP transport
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration
    pub fn new(config: &DeliveryConfig) -> anyhow::Result<Self> {
        let builder = if !is_present(&config.smtp_host) {
            // Never used for sending: submissions fail the configuration check first.
            tracing::warn!("SMTP host not configured, mailer will not connect");
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous("localhost")
        } else if config.smtp_tls {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP mailer initialized with STARTTLS"
            );
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP mailer initialized without TLS (e.g., MailDev)"
            );
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        let builder = builder
            .port(config.smtp_port)
            .timeout(Some(config.timeout()));

        let builder = if config.has_credentials() {
            builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
        } else {
            builder
        };

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

fn invalid(e: impl std::fmt::Display) -> DeliveryError {
    DeliveryError::new(DeliveryErrorKind::InvalidParameter, e.to_string())
}

fn build_message(request: DeliveryRequest) -> Result<Message, DeliveryError> {
    let from: Mailbox = request.source.parse().map_err(invalid)?;

    let mut builder = Message::builder()
        .from(from)
        .subject(request.subject)
        .header(ContentType::TEXT_PLAIN);

    for to in &request.destination {
        builder = builder.to(to.parse::<Mailbox>().map_err(invalid)?);
    }

    for reply_to in &request.reply_to {
        builder = builder.reply_to(reply_to.parse::<Mailbox>().map_err(invalid)?);
    }

    builder.body(request.body_text).map_err(invalid)
}

/// Map an SMTP reply code to a delivery failure kind.
pub fn classify_reply_code(code: u16) -> DeliveryErrorKind {
    match code {
        454 | 530 | 534 | 535 => DeliveryErrorKind::CredentialsError,
        550..=554 => DeliveryErrorKind::MessageRejected,
        421 | 450..=452 => DeliveryErrorKind::SendingPaused,
        500..=504 | 555 => DeliveryErrorKind::InvalidParameter,
        _ => DeliveryErrorKind::Unknown,
    }
}

fn classify(error: &lettre::transport::smtp::Error) -> DeliveryErrorKind {
    error
        .status()
        .and_then(|code| code.to_string().parse::<u16>().ok())
        .map(classify_reply_code)
        .unwrap_or(DeliveryErrorKind::Unknown)
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, request: DeliveryRequest) -> Result<MessageId, DeliveryError> {
        let message = build_message(request)?;

        tracing::debug!("Sending contact message over SMTP");

        match self.mailer.send(message).await {
            Ok(response) => {
                let text = response.message().collect::<Vec<_>>().join(" ");
                let id = if text.trim().is_empty() {
                    ulid::Ulid::new().to_string()
                } else {
                    text
                };

                Ok(MessageId(id))
            }
            Err(e) => {
                let kind = classify(&e);
                tracing::warn!(error = %e, %kind, "SMTP delivery failed");

                Err(DeliveryError::new(kind, e.to_string()))
            }
        }
    }
}

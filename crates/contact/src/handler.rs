use std::sync::Arc;

use crate::{
    ContactSubmission, DeliveryConfig, DeliveryErrorKind, DeliveryRequest, FailureKind, Mailer,
    SubmissionResult, is_present,
};

/// Validates contact submissions and relays the valid ones through a [`Mailer`].
///
/// Holds no per-request state; clones share the same mailer.
#[derive(Clone)]
pub struct SubmissionHandler {
    mailer: Arc<dyn Mailer>,
}

impl SubmissionHandler {
    pub fn new(mailer: impl Mailer + 'static) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }

    pub fn with_shared(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    #[tracing::instrument(name = "contact_submission", skip_all)]
    pub async fn handle(
        &self,
        submission: ContactSubmission,
        config: &DeliveryConfig,
    ) -> SubmissionResult {
        tracing::debug!(
            has_recipient = is_present(&config.recipient),
            has_sender = is_present(&config.sender),
            has_smtp_host = is_present(&config.smtp_host),
            has_smtp_username = is_present(&config.smtp_username),
            has_smtp_password = is_present(&config.smtp_password),
            "Checking delivery configuration"
        );

        let missing = config.missing();
        if !missing.is_empty() {
            tracing::error!(?missing, "Delivery configuration incomplete");
            return SubmissionResult::Failed(FailureKind::Configuration);
        }

        if submission.is_bot() {
            tracing::info!("Honeypot field filled, dropping submission");
            return SubmissionResult::Sent;
        }

        let errors = submission.field_errors();
        if !errors.is_empty() {
            tracing::info!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Submission failed validation"
            );
            return SubmissionResult::Invalid(errors);
        }

        tracing::debug!("Submission passed validation");

        let request = match DeliveryRequest::for_submission(&submission, config) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "Failed to render contact message");
                return SubmissionResult::Failed(FailureKind::Delivery(DeliveryErrorKind::Unknown));
            }
        };

        tracing::info!(
            message_len = submission.message.chars().count(),
            timeout_ms = config.timeout_ms,
            "Sending contact message"
        );

        match tokio::time::timeout(config.timeout(), self.mailer.send(request)).await {
            Ok(Ok(message_id)) => {
                tracing::info!(%message_id, "Contact message sent");
                SubmissionResult::Sent
            }
            Ok(Err(e)) => {
                tracing::error!(kind = %e.kind, detail = %e.detail, "Contact message delivery failed");
                SubmissionResult::Failed(FailureKind::Delivery(e.kind))
            }
            Err(_) => {
                tracing::error!(timeout_ms = config.timeout_ms, "Contact message delivery timed out");
                SubmissionResult::Failed(FailureKind::Delivery(DeliveryErrorKind::Unknown))
            }
        }
    }
}

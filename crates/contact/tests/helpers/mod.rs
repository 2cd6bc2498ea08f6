#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use folio_contact::{DeliveryConfig, DeliveryError, DeliveryRequest, Mailer, MessageId};

pub fn delivery_config() -> DeliveryConfig {
    DeliveryConfig {
        recipient: "owner@folio.localhost".to_owned(),
        sender: "noreply@folio.localhost".to_owned(),
        smtp_host: "smtp.folio.localhost".to_owned(),
        smtp_username: "folio".to_owned(),
        smtp_password: "secret".to_owned(),
        ..Default::default()
    }
}

/// Records every request and answers with a fixed outcome.
#[derive(Clone)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<DeliveryRequest>>>,
    outcome: Result<MessageId, DeliveryError>,
    delay: Option<Duration>,
}

impl RecordingMailer {
    pub fn succeeding() -> Self {
        Self {
            sent: Default::default(),
            outcome: Ok(MessageId("<test@folio.localhost>".to_owned())),
            delay: None,
        }
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self {
            outcome: Err(error),
            ..Self::succeeding()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::succeeding()
        }
    }

    pub fn sent(&self) -> Vec<DeliveryRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, request: DeliveryRequest) -> Result<MessageId, DeliveryError> {
        self.sent.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcome.clone()
    }
}

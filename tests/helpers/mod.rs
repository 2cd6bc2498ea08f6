//! Router setup with a recording mailer in place of SMTP

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use folio::{
    AppState,
    config::{Config, ObservabilityConfig, ServerConfig},
};
use folio_contact::{
    DeliveryConfig, DeliveryError, DeliveryRequest, Mailer, MessageId, SubmissionHandler,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

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

#[derive(Clone, Default)]
pub struct StubMailer {
    pub sent: Arc<Mutex<Vec<DeliveryRequest>>>,
    pub error: Option<DeliveryError>,
}

impl StubMailer {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Mailer for StubMailer {
    async fn send(&self, request: DeliveryRequest) -> Result<MessageId, DeliveryError> {
        self.sent.lock().unwrap().push(request);

        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(MessageId("<stub@folio.localhost>".to_owned())),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub mailer: StubMailer,
}

pub fn create_test_app(delivery: DeliveryConfig, mailer: StubMailer) -> TestApp {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        delivery,
        observability: ObservabilityConfig::default(),
    };

    let state = AppState {
        config,
        contact: SubmissionHandler::new(mailer.clone()),
    };

    TestApp {
        router: folio::routes::router(state),
        mailer,
    }
}

impl TestApp {
    pub async fn post_contact(&self, fields: &[(&str, &str)]) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();

        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contact")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

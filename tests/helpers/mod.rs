use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use contactdesk::{AppState, Config};
use contactdesk_contact::{DeliveryError, DeliverySettings, EmailDelivery, TemplateParams};
use http_body_util::BodyExt;

#[derive(Default)]
pub struct RecordingDelivery {
    pub calls: Mutex<Vec<TemplateParams>>,
    pub fail: bool,
}

impl RecordingDelivery {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::default(),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<TemplateParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    async fn send(
        &self,
        _settings: &DeliverySettings,
        params: &TemplateParams,
    ) -> Result<String, DeliveryError> {
        self.calls.lock().unwrap().push(params.clone());

        if self.fail {
            return Err(DeliveryError::Transport("connection refused".to_owned()));
        }

        Ok("OK".to_owned())
    }
}

pub fn create_router(delivery: Arc<RecordingDelivery>) -> Router {
    contactdesk::routes::router(AppState {
        config: Config::default(),
        delivery,
    })
}

pub fn post_contact(fields: &[(&str, &str)]) -> anyhow::Result<Request<Body>> {
    let body = serde_urlencoded::to_string(fields)?;

    Ok(Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?)
}

pub fn jane_doe() -> Vec<(&'static str, &'static str)> {
    vec![
        ("full_name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("subject", "Hi"),
        ("message", "Hello"),
        ("query_type", "support"),
        ("address", "123 Main St, New York, NY"),
    ]
}

pub async fn body_text(response: axum::response::Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

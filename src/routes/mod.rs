use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use contactdesk_contact::EmailDelivery;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod contact;
mod health;

pub use assets::AssetsService;
pub use contact::{ContactTemplate, Notice, SelectOption};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub delivery: Arc<dyn EmailDelivery>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/", get(contact::page).post(contact::action))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
}

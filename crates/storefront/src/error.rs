//! Handler error type.
//!
//! Backend and session failures are reported to Sentry before the client
//! gets a short, detail-free message. Client mistakes (bad form data,
//! missing rows, slug conflicts) are answered without reporting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::backend::StoreError;

/// Errors a route handler can return.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog or inquiry backend failed.
    #[error("store: {0}")]
    Store(#[from] StoreError),

    /// Reading or writing the session failed.
    #[error("session: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The request could not be understood.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Body text; backend details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Store(StoreError::NotFound(_)) => "Not found".to_string(),
            Self::Store(StoreError::Conflict(_)) => "This record already exists".to_string(),
            Self::Store(_) => "Backend unavailable".to_string(),
            Self::Session(_) => "Internal server error".to_string(),
            Self::BadRequest(reason) => format!("Bad request: {reason}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Handler failed");
        }

        (status, self.public_message()).into_response()
    }
}

/// Record an admin action in the Sentry breadcrumb trail.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data.unwrap_or_default() {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}

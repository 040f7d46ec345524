// tracker_server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use time_tracker::{ErrorKind, TrackerError};

use crate::services::people_lookup::LookupError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("People Lookup Error: {0}")]
  Lookup(#[from] LookupError),

  #[error("Configuration Error: {0}")]
  Config(String),

  // Domain and store failures from the core keep their own message.
  #[error(transparent)]
  Tracker(#[from] TrackerError),

  #[error("Request deadline of {0:?} elapsed")]
  Timeout(Duration),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Lookup(_) => StatusCode::BAD_GATEWAY,
      AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Tracker(err) => match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unavailable => match err {
          TrackerError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
          _ => StatusCode::INTERNAL_SERVER_ERROR,
        },
      },
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }

    let message = match self {
      // Driver details stay in the logs.
      AppError::Tracker(TrackerError::Database { .. }) => "Database operation failed".to_string(),
      AppError::Config(_) => "Configuration issue".to_string(),
      AppError::Lookup(_) => "People info service is unavailable".to_string(),
      AppError::Tracker(err) => err.to_string(),
      other => other.to_string(),
    };

    HttpResponse::build(status).json(json!({
      "status": status.canonical_reason().unwrap_or("Error"),
      "error": message,
    }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

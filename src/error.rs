use crate::constants::CITY_NOT_FOUND_MESSAGE;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("City not found in database: {0}")]
    CityNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Hub registry error: {0}")]
    HubRegistry(String),

    #[error("Product catalog error: {0}")]
    Catalog(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for errors caused by the caller's input rather than by infrastructure.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::CityNotFound(_) | AppError::InvalidRequest(_))
    }

    /// Message safe to hand back to the caller of an estimate.
    pub fn public_message(&self) -> String {
        match self {
            AppError::CityNotFound(_) => CITY_NOT_FOUND_MESSAGE.to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
            _ => "Freight estimate unavailable".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CityNotFound(_) | AppError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::HubRegistry(_) | AppError::Catalog(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {}", e),
            AppError::HubRegistry(ref e) => tracing::error!("Hub registry error: {}", e),
            AppError::Catalog(ref e) => tracing::warn!("Product catalog error: {}", e),
            AppError::Internal(ref e) => tracing::error!("Internal error: {}", e),
            AppError::CityNotFound(ref city) => tracing::info!("Unknown city: {}", city),
            AppError::InvalidRequest(_) => {}
        }

        let status = self.status_code();
        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

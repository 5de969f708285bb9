use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use receipt_storage::error::ReceiptError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(ReceiptError),
    Validation(ValidationErrors),
    InvalidPayload(JsonRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Receipt error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::InvalidPayload(e) => write!(f, "Invalid payload: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Self::Storage(ReceiptError::NotFound) => {
                (StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND_MESSAGE)
            }
            Self::Storage(e) => {
                tracing::warn!("Rejected receipt: {}", e);
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE)
            }
            Self::Validation(errors) => {
                tracing::warn!("Receipt failed validation: {}", errors);
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE)
            }
            Self::InvalidPayload(rejection) => {
                tracing::warn!("Receipt payload could not be read: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ReceiptError> for WebError {
    fn from(error: ReceiptError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(error: JsonRejection) -> Self {
        Self::InvalidPayload(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

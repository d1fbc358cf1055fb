use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;

/// HTTP-facing error with a JSON body of the shape
/// `{"error": "...", "detail": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    error: &'static str,
    detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.error,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::MovieNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(err.to_string()))
            }
            ServiceError::Validation(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(err.to_string()))
            }
        }
    }
}

/// Body deserialization failures (malformed JSON, wrong types, unknown
/// fields) are a caller mistake, so they map to 400 rather than axum's
/// default 422.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some(rejection.body_text()),
        )
    }
}

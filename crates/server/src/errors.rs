use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use store::StoreError;

/// HTTP-facing error: a status plus a short message rendered as
/// `{"error": msg}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Mapping for reads: an absent collection and an absent item are both
    /// plain 404s, indistinguishable to the caller.
    pub fn lookup(err: StoreError) -> Self {
        Self::new(StatusCode::NOT_FOUND, err.to_string())
    }

    /// Mapping for mutations: targeting a collection that was never created
    /// is a client error, a missing item inside one is 404.
    pub fn mutation(err: StoreError) -> Self {
        let status = match err {
            StoreError::CollectionNotFound(_) => StatusCode::BAD_REQUEST,
            StoreError::ItemNotFound(_, _) => StatusCode::NOT_FOUND,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

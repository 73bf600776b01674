//! HTTP error responses.
//!
//! The single translation point from search failures to status codes. Bodies
//! are always `{"detail": "<text>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::search::SearchError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No results found")]
    NotFound,

    #[error("{0}")]
    Internal(String),

    /// Missing or ill-typed query parameters
    #[error("{0}")]
    InvalidParams(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::NotFound => Self::NotFound,
            SearchError::Internal(message) => Self::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref message) = self {
            tracing::error!(error = %message, "search failed");
        }
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::charts::ChartSourceError;
use crate::services::FindSeatsError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `"error"`, mirrors the success envelope
    pub status: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// The train has no chart data
    NoData,
    /// The chart is structurally broken
    MalformedChart(String),
    /// The chart source failed
    ChartSource(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::NoData => (
                StatusCode::BAD_REQUEST,
                ApiError::new("NO_DATA", crate::services::seat_finder::NO_DATA_MESSAGE),
            ),
            AppError::MalformedChart(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("MALFORMED_CHART", "Seat chart is malformed").with_details(msg),
            ),
            AppError::ChartSource(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("CHART_SOURCE_ERROR", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<ChartSourceError> for AppError {
    fn from(err: ChartSourceError) -> Self {
        match err {
            ChartSourceError::InvalidTrain(_) => AppError::BadRequest(err.to_string()),
            other => AppError::ChartSource(other.to_string()),
        }
    }
}

impl From<FindSeatsError> for AppError {
    fn from(err: FindSeatsError) -> Self {
        match err {
            FindSeatsError::EmptyInput => AppError::NoData,
            FindSeatsError::Chart(e) => AppError::MalformedChart(e.to_string()),
            FindSeatsError::Source(e) => e.into(),
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::oem::OemError;
use crate::trajectory::EpochError;

#[derive(Debug)]
pub enum ApiError {
    /// Malformed caller input, surfaced as a distinct rejection instead of
    /// being coerced to a default.
    Validation(String),
    /// A loaded record violated the epoch format contract.
    Dataset(EpochError),
    /// The upstream feed could not be fetched or parsed.
    Upstream(OemError),
}

impl From<EpochError> for ApiError {
    fn from(e: EpochError) -> Self {
        ApiError::Dataset(e)
    }
}

impl From<OemError> for ApiError {
    fn from(e: OemError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("bad_input", &msg)),
            )
                .into_response(),
            ApiError::Dataset(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_message("dataset_error", &e.to_string())),
            )
                .into_response(),
            ApiError::Upstream(e) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::with_message(
                    "upstream_unavailable",
                    &e.to_string(),
                )),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}

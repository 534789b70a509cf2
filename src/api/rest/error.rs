//! HTTP error mapping to RFC-9457 Problem Details

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::contract::DomainError;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<DomainError> for Problem {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound { resource, id } => {
                Problem::new(StatusCode::NOT_FOUND, "Not Found")
                    .with_detail(format!("{resource} with id '{id}' was not found"))
            }

            DomainError::Validation { message } => {
                Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
            }

            DomainError::Conflict { reason } => {
                Problem::new(StatusCode::CONFLICT, "Conflict").with_detail(reason)
            }

            DomainError::Internal(error) => {
                tracing::error!("internal error: {:?}", error);
                Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                    .with_detail("An unexpected error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_detail() {
        let problem: Problem = DomainError::NotFound {
            resource: "dealer",
            id: 12,
        }
        .into();
        assert_eq!(problem.status, 404);
        assert_eq!(problem.detail.as_deref(), Some("dealer with id '12' was not found"));
    }

    #[test]
    fn validation_maps_to_400() {
        let problem: Problem = DomainError::validation("dealerName is required").into();
        assert_eq!(problem.status, 400);
    }
}

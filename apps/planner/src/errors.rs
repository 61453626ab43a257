use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the planning core. All of them are ordinary return values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Invalid bed dimensions: length {length}, width {width} (both must be positive and at most 10000 inches)")]
    InvalidDimensions { length: f64, width: f64 },

    #[error("No block candidates for bed '{bed}'")]
    NoCandidates { bed: String },

    #[error("Invalid planning policy: {0}")]
    InvalidPolicy(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Plan(e) if matches!(e, PlanError::NoCandidates { .. }) => {
                tracing::warn!("Planning produced no block: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNPROCESSABLE_ENTITY",
                    e.to_string(),
                )
            }
            AppError::Plan(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates_maps_to_422() {
        let err = AppError::from(PlanError::NoCandidates {
            bed: "tiny".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_dimensions_maps_to_400() {
        let err = AppError::from(PlanError::InvalidDimensions {
            length: -1.0,
            width: 10.0,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_plan_error_message_names_bed() {
        let err = PlanError::NoCandidates {
            bed: "charlie".to_string(),
        };
        assert!(err.to_string().contains("charlie"));
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::demos::service::{DemoStoreError, FieldViolation};

/// Field-level validation detail, one entry per violated constraint.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FieldError {
    /// Human-readable description of the violation.
    #[schema(example = "url must be a valid absolute URL")]
    pub message: String,
    #[serde(rename = "type")]
    #[schema(example = "Validation error")]
    pub kind: &'static str,
    /// The field that failed validation.
    #[schema(example = "url")]
    pub path: String,
    /// The rejected input value.
    pub value: String,
}

/// Body of a 400 validation failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationBody {
    #[schema(example = "ValidationError")]
    pub name: &'static str,
    pub message: String,
    pub errors: Vec<FieldError>,
}

/// Body of a 404 returned by mutating endpoints.
#[derive(Serialize, utoipa::ToSchema)]
pub struct NotFoundBody {
    #[schema(example = "demo with id: 7 not found")]
    pub message: String,
    #[schema(example = 404)]
    pub status: u16,
}

/// Body of a 500 backing-store failure, with best-effort diagnostic.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StorageBody {
    pub message: String,
    pub error: String,
    #[schema(example = 500)]
    pub status: u16,
}

/// Application-level error type. The closed set of failure shapes the HTTP
/// surface can produce; `IntoResponse` below is the single translation point
/// from typed failures to status/body pairs.
#[derive(Debug)]
pub enum AppError {
    /// 400 with field-level detail.
    Validation(Vec<FieldViolation>),
    /// 404 as a JSON `{message, status}` body (update/delete).
    NotFound { id: i32 },
    /// 404 as a plain-text body (fetch by id).
    NotFoundText { id: i32 },
    /// 500 with a contextual message and the underlying error string.
    Storage { message: String, detail: String },
}

impl From<FieldViolation> for FieldError {
    fn from(v: FieldViolation) -> Self {
        FieldError {
            message: v.message,
            kind: "Validation error",
            path: v.path,
            value: v.value,
        }
    }
}

/// Default store-to-HTTP mapping. Handlers that need a different rendering
/// (plain-text 404, contextual 500 message) match the store error themselves.
impl From<DemoStoreError> for AppError {
    fn from(err: DemoStoreError) -> Self {
        match err {
            DemoStoreError::NotFound(id) => AppError::NotFound { id },
            DemoStoreError::Validation(violations) => AppError::Validation(violations),
            DemoStoreError::Db(e) => AppError::Storage {
                message: "unexpected backing-store failure".into(),
                detail: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(violations) => {
                let message = format!(
                    "Validation error: {}",
                    violations
                        .iter()
                        .map(|v| v.message.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                tracing::warn!("{message}");
                let body = ValidationBody {
                    name: "ValidationError",
                    message,
                    errors: violations.into_iter().map(FieldError::from).collect(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::NotFound { id } => {
                let message = format!("demo with id: {id} not found");
                tracing::warn!("{message}");
                (
                    StatusCode::NOT_FOUND,
                    Json(NotFoundBody {
                        message,
                        status: 404,
                    }),
                )
                    .into_response()
            }
            AppError::NotFoundText { id } => {
                let message = format!("demo with id: {id} not found");
                tracing::warn!("{message}");
                (StatusCode::NOT_FOUND, message).into_response()
            }
            AppError::Storage { message, detail } => {
                tracing::warn!("{message}: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StorageBody {
                        message,
                        error: detail,
                        status: 500,
                    }),
                )
                    .into_response()
            }
        }
    }
}

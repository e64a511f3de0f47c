use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use completion_client::ClientError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Every way an analysis request can end without a 200.
///
/// The `Display` text of each variant is exactly what the caller sees in the
/// `error` field, so upstream details stay out of it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Idea and stage are required")]
    MissingFields,

    #[error("Invalid stage '{0}'. Expected one of: idea-early, prototype, pre-launch, investment-ready")]
    InvalidStage(String),

    #[error("AI request failed")]
    Upstream(#[from] ClientError),

    #[error("Invalid JSON from model")]
    InvalidModelJson { raw: String },

    #[error("Model response did not match expected shape")]
    ShapeMismatch { raw: String },
}

impl AppError {
    fn raw(&self) -> Option<&str> {
        match self {
            AppError::InvalidModelJson { raw } | AppError::ShapeMismatch { raw } => Some(raw),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct JsonError<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::InvalidStage(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidModelJson { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ShapeMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self, AppError::MethodNotAllowed) {
            builder.insert_header((header::ALLOW, "POST, OPTIONS"));
        }
        builder.json(JsonError {
            error: self.to_string(),
            raw: self.raw(),
        })
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared_types::ErrorResponse;
use std::fmt::Display;
use thiserror::Error;
use tracing::{error, warn};

/// The four failures a client can observe. The display text is the
/// `message` field of the response body.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Collapse a failure into the client-facing kind an endpoint reports,
/// logging the cause.
pub trait ResultExt<T> {
    /// Server-side failure, logged at `error`.
    fn or_api_error(self, kind: ApiError, context: &str) -> ApiResult<T>;
    /// Client-caused failure, logged at `warn`.
    fn or_reject(self, kind: ApiError, context: &str) -> ApiResult<T>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_api_error(self, kind: ApiError, context: &str) -> ApiResult<T> {
        self.map_err(|e| {
            error!(error = %e, status = kind.status_code().as_u16(), "{}", context);
            kind
        })
    }

    fn or_reject(self, kind: ApiError, context: &str) -> ApiResult<T> {
        self.map_err(|e| {
            warn!(error = %e, status = kind.status_code().as_u16(), "{}", context);
            kind
        })
    }
}

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use goalplanner_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Malformed request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    kind: &'static str,
    message: String,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(e) => {
                let status = match e {
                    CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    CoreError::InvalidAmount(_) | CoreError::Validation(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    CoreError::RemoteUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    CoreError::Storage(_) | CoreError::Unexpected(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, e.kind())
            }
            ApiError::Body(_) => (StatusCode::BAD_REQUEST, "Validation"),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            kind,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// src/error.rs
//
// HTTP error mapping. Bodies carry the route message only; causes are logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cake not found")]
    CakeNotFound,

    /// `message` is what the client sees, `source` only goes to the log.
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn failed(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Failed { message, source }
    }
}

#[derive(Serialize)]
struct ErrorJson {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::CakeNotFound => StatusCode::NOT_FOUND,
            AppError::Failed { message, source } => {
                error!("{message}: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorJson {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

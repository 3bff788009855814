//! Error type shared by the connector, the store and the HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorResponse;
use common::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Db(String),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("database connection lock poisoned")]
    LockPoisoned,
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(_) => ErrorResponse::new(self.to_string()),
            // Storage details stay in the server log.
            _ => ErrorResponse::new("internal server error"),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

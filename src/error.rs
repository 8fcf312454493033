use actix_web::{http::StatusCode, ResponseError};
use log::error;
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

use crate::response::response_from_error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("constraint violation")]
    ConstraintViolation(String),
    #[error("internal error")]
    Internal(String),
}

impl AppError {
    pub fn param_error(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        error!("internal error: {}", detail);
        Self::Internal(detail)
    }

    pub fn msg(&self) -> String {
        self.to_string()
    }

    /// Raw detail surfaced next to the message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation(detail) | Self::Internal(detail) => Some(detail),
            Self::BadRequest(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::ConstraintViolation(detail),
            // a dangling reference means the id the caller named does not exist
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::NotFound("referenced row"),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ConstraintViolation(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        response_from_error(self)
    }
}

pub fn map_tx_error(err: TransactionError<AppError>) -> AppError {
    match err {
        TransactionError::Connection(db) => db.into(),
        TransactionError::Transaction(app) => app,
    }
}

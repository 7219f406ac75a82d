use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use serde::Serialize;

use thiserror::Error;

/// SQLSTATE reported by Postgres for a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    Validation(String),

    #[error("This email address is already subscribed")]
    AlreadySubscribed,

    #[error("{0}")]
    Store(sqlx::Error),
}

impl From<sqlx::Error> for RestError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return Self::AlreadySubscribed;
            }
        }

        tracing::error!(error.cause_chain = ?e, "Record store request failed");
        Self::Store(e)
    }
}

/// JSON body for every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AlreadySubscribed => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Error handler for malformed JSON request bodies
pub fn json_error_handler(e: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestError::Validation(e.to_string()).into()
}

/// Error handler for malformed query strings
pub fn query_error_handler(e: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestError::Validation(e.to_string()).into()
}

use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use log::error;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    DatabaseError(String),
    Config(String),
    Interaction(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Message safe to show to whoever triggered the error.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            _ => "Internal Server Error".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::Interaction(msg) => write!(f, "Interaction Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() })
            }
            AppError::NotFound(msg) => {
                HttpResponse::NotFound().json(ErrorResponse { error: msg.clone() })
            }
            AppError::Conflict(msg) => {
                HttpResponse::Conflict().json(ErrorResponse { error: msg.clone() })
            }
            other => {
                error!("{}", other);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: other.public_message(),
                })
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                // class 22: data exception (bad date, value out of range, ...)
                Some(code) if code.starts_with("22") => {
                    return AppError::BadRequest("Invalid data provided.".to_string());
                }
                Some("23505") => {
                    return AppError::Conflict("Associate id already exists".to_string());
                }
                _ => {}
            }
        }
        AppError::DatabaseError(err.to_string())
    }
}

use axum::http::StatusCode;
use redis::RedisError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Redis pool error: {0}")]
    RedisPoolError(String),

    #[error("Redis command error: {0}")]
    RedisCommandError(#[from] RedisError),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found")]
    NotFound(String),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::RedisPoolError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
            AppError::RedisCommandError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Deserialization(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<bb8::RunError<RedisError>> for AppError {
    fn from(e: bb8::RunError<RedisError>) -> Self {
        match e {
            bb8::RunError::User(err) => AppError::RedisCommandError(err),
            bb8::RunError::TimedOut => {
                AppError::RedisPoolError("Redis connection timed out".into())
            }
        }
    }
}

pub mod caller;
pub mod clock;
pub mod db;
pub mod messages;
pub mod participants;
pub mod status;
pub mod sweeper;

use axum::{extract::FromRef, http::StatusCode, response::{IntoResponse, Response}};
use serde_json::Value;
use sqlx::SqlitePool;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}\n\n{}", self.0, self.0.backtrace()),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Checks that `value` is a present, non-empty JSON string, appending a
/// joi-style message per violation so a response can report every problem
/// at once.
pub fn require_str_field(field: &str, value: Option<Value>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.push(format!("\"{field}\" is required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(format!("\"{field}\" is not allowed to be empty"));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(format!("\"{field}\" must be a string"));
            None
        }
    }
}

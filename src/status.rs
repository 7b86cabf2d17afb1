use axum::{Router, debug_handler, extract::State, http::StatusCode, response::{IntoResponse, Response}, routing::post};
use sqlx::SqlitePool;

use crate::{AppResult, AppState, caller::Caller, clock};

pub fn router() -> Router<AppState> {
    Router::new().route("/status", post(refresh_status))
}

/// Refreshes the caller's liveness stamp so the sweeper keeps them around.
pub async fn heartbeat(db_pool: &SqlitePool, user: &str) -> AppResult<Response> {
    let updated = sqlx::query("UPDATE participants SET last_status=? WHERE name=?")
        .bind(clock::now_millis())
        .bind(user)
        .execute(db_pool)
        .await?;

    if updated.rows_affected() == 0 {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    Ok(StatusCode::OK.into_response())
}

#[debug_handler]
async fn refresh_status(
    State(db_pool): State<SqlitePool>,
    Caller(user): Caller,
) -> AppResult<Response> {
    heartbeat(&db_pool, &user).await
}

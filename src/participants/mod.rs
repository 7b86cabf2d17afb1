pub mod list;
pub mod register;

use axum::{Json, Router, debug_handler, extract::State, response::{IntoResponse, Response}, routing::get};
use sqlx::SqlitePool;

use crate::{AppResult, AppState};

pub use register::RegisterBody;

pub fn router() -> Router<AppState> {
    Router::new().route("/participants", get(list_participants).post(register_participant))
}

#[debug_handler]
async fn register_participant(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<RegisterBody>,
) -> AppResult<Response> {
    register::register(&db_pool, body).await
}

#[debug_handler]
async fn list_participants(State(db_pool): State<SqlitePool>) -> AppResult<Response> {
    Ok(Json(list::all(&db_pool).await?).into_response())
}

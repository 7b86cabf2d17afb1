pub mod list;
pub mod post;

use axum::{Json, Router, debug_handler, extract::{Query, State}, response::Response, routing::get};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{AppResult, AppState, caller::Caller};

pub use post::MessageBody;

pub fn router() -> Router<AppState> {
    Router::new().route("/messages", get(history).post(send_message))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    limit: Option<String>,
}

#[debug_handler]
async fn send_message(
    State(db_pool): State<SqlitePool>,
    Caller(user): Caller,
    Json(body): Json<MessageBody>,
) -> AppResult<Response> {
    post::send(&db_pool, &user, body).await
}

#[debug_handler]
async fn history(
    State(db_pool): State<SqlitePool>,
    Caller(user): Caller,
    Query(HistoryQuery { limit }): Query<HistoryQuery>,
) -> AppResult<Response> {
    list::history(&db_pool, &user, limit).await
}

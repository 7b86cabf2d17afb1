use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use sqlx::SqlitePool;

use crate::{AppResult, db::{EVERYONE, Message, MessageKind}};

/// Every message the caller may see: sent by them, addressed to them, or
/// broadcast. Insertion order (oldest first).
pub async fn visible_messages(db_pool: &SqlitePool, user: &str) -> AppResult<Vec<Message>> {
    let rows = sqlx::query_as::<_, (String, String, String, String, String)>(
        "SELECT \"from\",\"to\",text,type,time FROM messages
         WHERE \"from\"=? OR \"to\"=? OR \"to\"=? ORDER BY id",
    )
    .bind(user)
    .bind(user)
    .bind(EVERYONE)
    .fetch_all(db_pool)
    .await?;

    let mut messages = Vec::with_capacity(rows.len());
    for (from, to, text, kind, time) in rows {
        let kind = MessageKind::parse(&kind)
            .ok_or_else(|| anyhow::anyhow!("unknown message type {kind:?} in store"))?;
        messages.push(Message { from, to, text, kind, time });
    }
    Ok(messages)
}

/// The last `limit` entries, newest first.
pub fn newest_first(mut messages: Vec<Message>, limit: i64) -> Vec<Message> {
    let start = messages.len().saturating_sub(limit as usize);
    let mut tail = messages.split_off(start);
    tail.reverse();
    tail
}

/// Numeric `limit` contract: any number ≥ 1 counts, fractions truncate
/// toward zero; NaN, non-numeric and anything below 1 are client errors.
pub fn parse_limit(raw: &str) -> Option<i64> {
    match raw.parse::<f64>() {
        Ok(limit) if limit >= 1.0 => Some(limit as i64),
        _ => None,
    }
}

/// Without `limit`, the whole visible history in insertion order. With it,
/// the newest `limit` entries, newest first.
pub async fn history(db_pool: &SqlitePool, user: &str, limit: Option<String>) -> AppResult<Response> {
    let messages = visible_messages(db_pool, user).await?;

    let Some(raw) = limit else {
        return Ok(Json(messages).into_response());
    };

    match parse_limit(&raw) {
        Some(limit) => Ok(Json(newest_first(messages, limit)).into_response()),
        None => Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    }
}

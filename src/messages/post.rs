use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{AppResult, clock, db::{self, Message, MessageKind}, require_str_field};

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub to: Option<Value>,
    pub text: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
}

/// Checks `to`, `text` and `type` together, reporting every violation.
/// Only `message` and `private_message` may be posted; `status` is reserved
/// for the server's own join/leave announcements.
pub fn validate_message(body: MessageBody) -> Result<(String, String, MessageKind), Vec<String>> {
    let mut errors = Vec::new();

    let to = require_str_field("to", body.to, &mut errors);
    let text = require_str_field("text", body.text, &mut errors);
    let kind = match require_str_field("type", body.kind, &mut errors) {
        Some(s) => match s.as_str() {
            "message" => Some(MessageKind::Message),
            "private_message" => Some(MessageKind::PrivateMessage),
            _ => {
                errors.push("\"type\" must be one of [message, private_message]".to_owned());
                None
            }
        },
        None => None,
    };

    match (to, text, kind) {
        (Some(to), Some(text), Some(kind)) if errors.is_empty() => Ok((to, text, kind)),
        _ => Err(errors),
    }
}

pub async fn send(db_pool: &SqlitePool, user: &str, body: MessageBody) -> AppResult<Response> {
    let (to, text, kind) = match validate_message(body) {
        Ok(fields) => fields,
        Err(errors) => {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response());
        }
    };

    if sqlx::query_as::<_, (i64,)>("SELECT 1 FROM participants WHERE name=?")
        .bind(user)
        .fetch_optional(db_pool)
        .await?
        .is_none()
    {
        return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response());
    }

    db::insert_message(
        db_pool,
        &Message {
            from: user.to_owned(),
            to,
            text,
            kind,
            time: clock::wall_clock(clock::now_millis()),
        },
    )
    .await?;

    Ok(StatusCode::CREATED.into_response())
}

use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{AppResult, clock, db::{self, EVERYONE, Message, MessageKind}, require_str_field};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub name: Option<Value>,
}

pub fn validate_name(name: Option<Value>) -> Result<String, Vec<String>> {
    let mut errors = Vec::new();
    match require_str_field("name", name, &mut errors) {
        Some(name) => Ok(name),
        None => Err(errors),
    }
}

/// Inserts the participant stamped now and announces the arrival to the
/// room. Duplicate names conflict, whether seen by the lookup or by the
/// primary key when two registrations race.
pub async fn register(db_pool: &SqlitePool, body: RegisterBody) -> AppResult<Response> {
    let name = match validate_name(body.name) {
        Ok(name) => name,
        Err(errors) => {
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response());
        }
    };

    if sqlx::query_as::<_, (i64,)>("SELECT 1 FROM participants WHERE name=?")
        .bind(&name)
        .fetch_optional(db_pool)
        .await?
        .is_some()
    {
        return Ok(StatusCode::CONFLICT.into_response());
    }

    let now = clock::now_millis();
    if let Err(err) = sqlx::query("INSERT INTO participants (name,last_status) values (?,?)")
        .bind(&name)
        .bind(now)
        .execute(db_pool)
        .await
    {
        if err.as_database_error().is_some_and(|e| e.is_unique_violation()) {
            return Ok(StatusCode::CONFLICT.into_response());
        }
        return Err(err.into());
    }

    db::insert_message(
        db_pool,
        &Message {
            from: name,
            to: EVERYONE.to_owned(),
            text: "entra na sala...".to_owned(),
            kind: MessageKind::Status,
            time: clock::wall_clock(now),
        },
    )
    .await?;

    Ok(StatusCode::CREATED.into_response())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::validate_name;

    #[test]
    fn valid_name_passes_through() {
        assert_eq!(validate_name(Some(json!("Ana"))), Ok("Ana".to_owned()));
    }

    #[test]
    fn missing_name_is_required() {
        assert_eq!(validate_name(None), Err(vec!["\"name\" is required".to_owned()]));
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            validate_name(Some(json!(""))),
            Err(vec!["\"name\" is not allowed to be empty".to_owned()])
        );
    }

    #[test]
    fn numeric_name_rejected() {
        assert_eq!(
            validate_name(Some(json!(42))),
            Err(vec!["\"name\" must be a string".to_owned()])
        );
    }
}

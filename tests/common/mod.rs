use axum::response::Response;
use batepapo::{db, messages::MessageBody, participants::RegisterBody};
use serde_json::json;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

// One connection only: every connection to sqlite::memory: opens its own
// database, so a wider pool would scatter the tables.
pub async fn test_pool() -> SqlitePool {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    db::init(&db_pool).await.expect("schema init");
    db_pool
}

pub fn name_body(name: &str) -> RegisterBody {
    RegisterBody { name: Some(json!(name)) }
}

pub fn message_body(to: &str, text: &str, kind: &str) -> MessageBody {
    MessageBody {
        to: Some(json!(to)),
        text: Some(json!(text)),
        kind: Some(json!(kind)),
    }
}

pub fn status_of(response: Response) -> u16 {
    response.status().as_u16()
}

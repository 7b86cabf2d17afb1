use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Sentinel recipient for broadcast messages, visible to everyone.
pub const EVERYONE: &str = "Todos";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,

    // unique: name
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    PrivateMessage,
    Status,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "message" => Some(Self::Message),
            "private_message" => Some(Self::PrivateMessage),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Immutable once inserted. `from`/`to` carry participant names with no
/// referential integrity; a message may outlive both ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String,
}

/// Idempotent schema bootstrap, run once at startup. The rowid on
/// `messages` pins insertion order for the history endpoint.
pub async fn init(db_pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS participants (
            name TEXT PRIMARY KEY,
            last_status INTEGER NOT NULL
        )",
    )
    .execute(db_pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            \"from\" TEXT NOT NULL,
            \"to\" TEXT NOT NULL,
            text TEXT NOT NULL,
            type TEXT NOT NULL,
            time TEXT NOT NULL
        )",
    )
    .execute(db_pool)
    .await?;

    Ok(())
}

pub async fn insert_message(db_pool: &SqlitePool, message: &Message) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO messages (\"from\",\"to\",text,type,time) values (?,?,?,?,?)")
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .bind(message.kind.as_str())
        .bind(&message.time)
        .execute(db_pool)
        .await?;
    Ok(())
}

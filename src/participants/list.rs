use sqlx::SqlitePool;

use crate::{AppResult, db::Participant};

/// The full participant set, unfiltered and unpaginated.
pub async fn all(db_pool: &SqlitePool) -> AppResult<Vec<Participant>> {
    let rows = sqlx::query_as::<_, (String, i64)>("SELECT name,last_status FROM participants")
        .fetch_all(db_pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(name, last_status)| Participant { name, last_status })
        .collect())
}

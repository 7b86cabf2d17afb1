use std::time::Duration;

use sqlx::SqlitePool;

use crate::{clock, db::{self, EVERYONE, Message, MessageKind}};

pub const SWEEP_PERIOD: Duration = Duration::from_secs(15);
pub const IDLE_CUTOFF_MILLIS: i64 = 10_000;

/// Recurring eviction loop, spawned from `main` next to the request
/// handlers. A failed pass is logged and the loop keeps going.
pub async fn run(db_pool: SqlitePool) {
    let mut tick = tokio::time::interval(SWEEP_PERIOD);
    // the first tick completes immediately
    tick.tick().await;
    loop {
        tick.tick().await;
        if let Err(err) = sweep(&db_pool, clock::now_millis()).await {
            eprintln!("sweep failed: {err}");
        }
    }
}

/// One eviction pass: removes every participant whose last heartbeat is
/// older than the idle cutoff and announces each departure to the room.
/// Returns how many were evicted.
///
/// A heartbeat racing the pass can still lose its participant; the room
/// simply sees them rejoin. No locking is taken against in-flight requests.
pub async fn sweep(db_pool: &SqlitePool, now: i64) -> anyhow::Result<usize> {
    let stale = sqlx::query_as::<_, (String,)>("SELECT name FROM participants WHERE last_status < ?")
        .bind(now - IDLE_CUTOFF_MILLIS)
        .fetch_all(db_pool)
        .await?;

    for (name,) in &stale {
        sqlx::query("DELETE FROM participants WHERE name=?")
            .bind(name)
            .execute(db_pool)
            .await?;

        db::insert_message(
            db_pool,
            &Message {
                from: name.clone(),
                to: EVERYONE.to_owned(),
                text: "sai da sala...".to_owned(),
                kind: MessageKind::Status,
                time: clock::wall_clock(now),
            },
        )
        .await?;
    }

    Ok(stale.len())
}

mod common;

use batepapo::messages::list::visible_messages;
use batepapo::participants::{list, register};
use batepapo::status::heartbeat;
use batepapo::sweeper::{IDLE_CUTOFF_MILLIS, sweep};
use batepapo::clock;
use common::*;

async fn backdate(pool: &sqlx::SqlitePool, name: &str, millis_ago: i64) {
    sqlx::query("UPDATE participants SET last_status=? WHERE name=?")
        .bind(clock::now_millis() - millis_ago)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn evicts_idle_participants_and_announces_departure() {
    let pool = test_pool().await;
    register::register(&pool, name_body("Ana")).await.unwrap();
    register::register(&pool, name_body("Bia")).await.unwrap();
    backdate(&pool, "Ana", IDLE_CUTOFF_MILLIS + 1_000).await;

    let evicted = sweep(&pool, clock::now_millis()).await.unwrap();
    assert_eq!(evicted, 1);

    let names: Vec<_> = list::all(&pool).await.unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Bia"]);

    let visible = visible_messages(&pool, "Bia").await.unwrap();
    let last = visible.last().unwrap();
    assert_eq!(last.from, "Ana");
    assert_eq!(last.to, "Todos");
    assert_eq!(last.text, "sai da sala...");
}

#[tokio::test]
async fn fresh_participants_survive_the_pass() {
    let pool = test_pool().await;
    register::register(&pool, name_body("Ana")).await.unwrap();

    let evicted = sweep(&pool, clock::now_millis()).await.unwrap();
    assert_eq!(evicted, 0);
    assert_eq!(list::all(&pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn heartbeat_refreshes_and_saves_from_eviction() {
    let pool = test_pool().await;
    register::register(&pool, name_body("Ana")).await.unwrap();
    backdate(&pool, "Ana", IDLE_CUTOFF_MILLIS + 1_000).await;

    let response = heartbeat(&pool, "Ana").await.unwrap();
    assert_eq!(status_of(response), 200);

    let evicted = sweep(&pool, clock::now_millis()).await.unwrap();
    assert_eq!(evicted, 0);
}

#[tokio::test]
async fn heartbeat_from_unknown_participant_not_found() {
    let pool = test_pool().await;

    let response = heartbeat(&pool, "Zeca").await.unwrap();
    assert_eq!(status_of(response), 404);
}

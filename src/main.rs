use axum::Router;
use batepapo::{AppState, db, messages, participants, status, sweeper};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(dotenv::var("DATABASE_URL")?.as_str())
        .await?;
    db::init(&db_pool).await?;

    tokio::spawn(sweeper::run(db_pool.clone()));

    let app = Router::new()
        .merge(participants::router())
        .merge(messages::router())
        .merge(status::router())
        .with_state(AppState { db_pool })
        .layer(CorsLayer::permissive());

    let port = dotenv::var("PORT").unwrap_or_else(|_| "5000".to_owned());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    println!("Server running on port: {port}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[macro_use]
extern crate log;

use linkdrop_server::api;
use migration::MigratorTrait;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let db_url = std::env::var("DB_URL").expect("Environment variable DB_URL not set");
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "[::]:8000".to_string());

    let db = sea_orm::Database::connect(db_url).await.expect("Unable to connect to database");
    migration::Migrator::up(&db, None).await.expect("Unable to apply migrations");

    let app = api::router(api::AppState { db: std::sync::Arc::new(db) });

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await.expect("Unable to bind listener");
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await.expect("Unable to start server");
}

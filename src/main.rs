use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use playtube::config::{AppState, Config};
use playtube::routes;
use playtube::services::storage_service::StorageService;
use sea_orm::Database;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting PlayTube Backend...");

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = Database::connect(&cfg.database_url)
        .await
        .expect("🔥 Failed to connect to Database!");
    println!("✅ Database Connected!");

    // 2. Schema Migrations
    println!("🗂️  Running Migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        tracing::error!("❌ Migration failed: {}", e);
        panic!("Migration failed: {}", e);
    }
    println!("✅ Schema up to date!");

    // 3. Setup Services
    let storage = StorageService::new(cfg.clone());

    // 4. Build App State
    let state = AppState {
        db: Arc::new(db),
        storage,
    };

    // 5. Initialize Router
    let app = routes::create_routes(state.clone()).with_state(state);

    // 6. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

use notes_api_rust::auth::TokenService;
use notes_api_rust::config::AppConfig;
use notes_api_rust::database;
use notes_api_rust::routes::app;
use notes_api_rust::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Notes API in {:?} mode", config.environment);

    let tokens = TokenService::new(&config.security.jwt_secret, config.security.jwt_expiry_hours)
        .unwrap_or_else(|e| panic!("token service init failed (set SECRET_KEY): {}", e));

    let pool = database::connect(&config.database)
        .unwrap_or_else(|e| panic!("database pool init failed: {}", e));

    // Best-effort schema bootstrap: the server still starts when the
    // database is down and /health reports the degraded state
    if let Err(e) = database::ensure_schema(&pool).await {
        tracing::warn!("schema bootstrap failed, continuing: {}", e);
    }

    let state = AppState::new(pool, tokens);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Notes API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

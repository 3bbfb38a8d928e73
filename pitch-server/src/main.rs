use pitch_server::{config::ServerConfig, routes, state};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("failed to start pitch-server: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    let state = state::build_state(&config)?;

    let app = routes::project_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind {}: {e}", config.bind))?;

    tracing::info!("pitch-server listening on {}", config.bind);
    axum::serve(listener, app).await.map_err(|e| e.to_string())
}

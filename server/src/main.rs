mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    match &config.backend_url {
        Some(url) => tracing::info!(backend = %url, timeout_secs = config.backend_timeout_secs, "forwarding /api"),
        None => tracing::warn!("BACKEND_URL not set; /api forwarding disabled"),
    }

    let state = state::AppState::new(&config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos configuration failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "activos listening");
    axum::serve(listener, app).await.expect("server failed");
}

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");
    let port = config.port;
    let state = state::AppState::new(&config);

    // Without Leptos site config, still serve the API so the passthrough works.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site not configured, serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, api_json = %config.api_json_path.display(), "phone-login listening");
    axum::serve(listener, app).await.expect("server failed");
}

mod dashboard;
mod detect;
mod nav;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let detect = detect::DetectClient::from_env().expect("detection client init failed");
    tracing::info!(backend = detect.base_url(), "detection backend configured");

    let state = state::AppState::new(detect);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "detconsole listening");
    axum::serve(listener, app).await.expect("server failed");
}

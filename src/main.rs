mod catalog;
mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::Config::from_env().expect("invalid configuration");
    let catalog = catalog::Catalog::load(&config.data_dir);
    let state = state::AppState::new(catalog, &config.site_base_url);

    let app = routes::app(state, &config.static_dir);
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "consumesafe listening");
    axum::serve(listener, app).await.expect("server failed");
}

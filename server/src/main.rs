mod config;
mod routes;
mod services;
mod state;

use config::AppConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match services::catalog::load(config.catalog_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            std::process::exit(1);
        }
    };
    tracing::info!(
        products = catalog.products.len(),
        manifolds = catalog.manifolds.len(),
        max_ports = catalog.max_ports(),
        "catalog loaded"
    );

    let port = config.port;
    let environment = config.environment.as_str();
    let state = state::AppState::new(catalog, config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, environment, "underfloor heating API listening");
    axum::serve(listener, app).await.expect("server failed");
}

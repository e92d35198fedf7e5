use axum::Router;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use crudui::core::{AppState, CruduiConfig};
use crudui::router::init_router;
use crudui::session::periodic_cleanup_task;
use crudui::welcome::welcome;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    dotenv().ok();
    let config = CruduiConfig::new_config().unwrap_or_else(|err| panic!("Missing needed env: {}", err));

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    welcome();

    let state = AppState::new(config).unwrap_or_else(|err| panic!("Invalid directory url: {}", err));
    tokio::spawn(periodic_cleanup_task(state.sessions.clone()));

    let url = format!("{}:{}", state.env.console_url, state.env.console_port);
    let app: Router = init_router(state).await;
    let listener = TcpListener::bind(url.clone()).await.unwrap();
    info!("Server is listening on: {url}");
    axum::serve(listener, app).await.unwrap();
    info!("Stopping crudui...");
}

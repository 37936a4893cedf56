use axum::{Router, response::Html, routing::get};
use shelfwise_shared::AppError;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>Shelfwise</h1>")
}

/// Full router: banner, API routes and permissive CORS.
pub fn app(app_state: AppState) -> Router {
  Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .layer(CorsLayer::permissive())
    .with_state(app_state)
}

pub async fn server(app_state: AppState, addr: &str) -> Result<(), AppError> {
  let listener = TcpListener::bind(addr).await?;

  tracing::info!("server started at http://{addr}");

  axum::serve(listener, app(app_state))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  tracing::info!("server stopped");

  Ok(())
}

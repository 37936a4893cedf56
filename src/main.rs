use std::sync::Arc;

use sea_orm::Database;
use shelfwise_core::{PgBookRepository, RecommendConfig};
use shelfwise_server::{server, utils::AppState};
use shelfwise_shared::{APP_ENV, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug,shelfwise_core=debug", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(tracing_error::ErrorLayer::default())
    .init();

  let db = Database::connect(APP_ENV.database_url.as_str()).await?;

  let repository = PgBookRepository::new(db);
  match repository.ping().await {
    Ok(()) => tracing::info!("catalogue database reachable"),
    Err(err) => tracing::warn!(error = %err, "catalogue database not reachable yet"),
  }

  let config = RecommendConfig::from_env();
  tracing::info!(?config, "recommender configured");

  let state = AppState::new(Arc::new(repository), config);
  server(state, &APP_ENV.listen_addr).await
}

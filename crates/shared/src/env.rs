use std::env;
use std::sync::LazyLock;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

pub struct AppEnv {
  pub database_url: String,
  pub listen_addr: String,
  /// Multiplier applied to the text block (alpha)
  pub text_weight: Option<f64>,
  /// Multiplier applied to the numeric block (beta)
  pub numeric_weight: Option<f64>,
}

impl AppEnv {
  fn new() -> Self {
    dotenvy::dotenv().ok();

    Self {
      database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
      listen_addr: env::var("SHELFWISE_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned()),
      text_weight: parse_weight("SHELFWISE_TEXT_WEIGHT"),
      numeric_weight: parse_weight("SHELFWISE_NUMERIC_WEIGHT"),
    }
  }
}

fn parse_weight(key: &str) -> Option<f64> {
  env::var(key)
    .ok()
    .and_then(|raw| raw.trim().parse::<f64>().ok())
    .filter(|w| w.is_finite())
}

pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);

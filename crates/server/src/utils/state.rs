use std::sync::Arc;

use shelfwise_core::{BookRepository, RecommendConfig, Recommender};

pub type SharedRepository = Arc<dyn BookRepository>;

#[derive(Clone)]
pub struct AppState {
  pub recommender: Arc<Recommender<SharedRepository>>,
}

impl AppState {
  #[must_use]
  pub fn new(repository: SharedRepository, config: RecommendConfig) -> Self {
    Self {
      recommender: Arc::new(Recommender::new(repository, config)),
    }
  }
}

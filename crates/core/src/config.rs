use shelfwise_shared::APP_ENV;

/// Minimum number of distinct borrowed books before recommending anything.
pub const MIN_POSITIVES: usize = 3;

/// Number of identifiers returned when the caller does not ask for a count.
pub const DEFAULT_TOP_K: i64 = 3;

/// Vocabulary cap for the n-gram model.
pub const MAX_FEATURES: usize = 5000;

/// Relative importance of the text and numeric feature blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockWeights {
  /// alpha
  pub text: f64,
  /// beta
  pub numeric: f64,
}

impl Default for BlockWeights {
  fn default() -> Self {
    Self {
      text: 1.0,
      numeric: 1.0,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendConfig {
  pub min_positives: usize,
  pub max_features: usize,
  /// Inclusive n-gram lengths, `(1, 2)` is unigrams plus bigrams.
  pub ngram_range: (usize, usize),
  pub weights: BlockWeights,
}

impl Default for RecommendConfig {
  fn default() -> Self {
    Self {
      min_positives: MIN_POSITIVES,
      max_features: MAX_FEATURES,
      ngram_range: (1, 2),
      weights: BlockWeights::default(),
    }
  }
}

impl RecommendConfig {
  /// Defaults with the block weights overridden from the environment.
  #[must_use]
  pub fn from_env() -> Self {
    let mut config = Self::default();
    if let Some(text) = APP_ENV.text_weight {
      config.weights.text = text;
    }
    if let Some(numeric) = APP_ENV.numeric_weight {
      config.weights.numeric = numeric;
    }
    config
  }
}

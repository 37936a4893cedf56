mod combine;
pub use combine::{FeatureMatrix, combine};

mod csr;
pub use csr::split_rows;

mod numeric;
pub use numeric::{NUMERIC_COLUMNS, StandardScaler, numeric_features, standardize};

mod profile;
pub use profile::{PreferenceVector, aggregate};

mod rank;
pub use rank::{ScoredCandidate, rank, score_candidates};

mod text;
pub use text::{FIELD_SEPARATOR, TextBlock, TfidfVectorizer, build_text};

use crate::{BookId, BookRecord, BookRepository, RecommendConfig, RecommendError, UserId};

// ──────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────

/// Terminal state of one recommendation request. Failures are reported
/// through `RecommendError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
  /// Fewer distinct borrowed books than `min_positives`.
  InsufficientHistory { positives: usize },
  /// Nothing on the shelf the user has not read already.
  NoCandidates,
  /// Candidate ids, most similar first.
  Ranked(Vec<BookId>),
}

impl Recommendation {
  #[must_use]
  pub fn into_ids(self) -> Vec<BookId> {
    match self {
      Self::Ranked(ids) => ids,
      Self::InsufficientHistory { .. } | Self::NoCandidates => Vec::new(),
    }
  }
}

// ──────────────────────────────────────────────────
// Pipeline
// ──────────────────────────────────────────────────

/// Build features for both sets and rank the candidates.
///
/// Both the vocabulary and the scaler are fitted on positives and candidates
/// together, so the two feature matrices share one column space.
pub fn rank_candidates(
  positives: &[BookRecord],
  candidates: &[BookRecord],
  top_k: i64,
  config: &RecommendConfig,
) -> Result<Vec<BookId>, RecommendError> {
  let (n_pos, n_cand) = (positives.len(), candidates.len());

  let texts: Vec<String> = positives.iter().chain(candidates).map(build_text).collect();
  let text = TfidfVectorizer::new(config.max_features, config.ngram_range).fit_transform(&texts);
  let (text_pos, text_cand) = split_rows(&text.matrix, n_pos)?;

  let (num_pos, num_cand) = standardize(positives, candidates);

  tracing::debug!(
    n_pos,
    n_cand,
    vocabulary = text.vocabulary.len(),
    text_pos = ?text_pos.shape(),
    text_cand = ?text_cand.shape(),
    num_pos = ?num_pos.dim(),
    num_cand = ?num_cand.dim(),
    "feature blocks built"
  );

  let x_pos = combine(&text_pos, &num_pos, config.weights)?;
  let x_cand = combine(&text_cand, &num_cand, config.weights)?;

  if x_pos.rows() != n_pos {
    return Err(RecommendError::shape_mismatch(
      "positive features",
      (n_pos, x_pos.cols()),
      x_pos.shape(),
    ));
  }
  if x_cand.rows() != n_cand || x_cand.cols() != x_pos.cols() {
    return Err(RecommendError::shape_mismatch(
      "candidate features",
      (n_cand, x_pos.cols()),
      x_cand.shape(),
    ));
  }

  let preference = aggregate(&x_pos);
  let ids: Vec<BookId> = candidates.iter().map(|book| book.id).collect();

  rank(&x_cand, &ids, &preference, top_k)
}

/// Content-based recommender over an injected catalogue.
pub struct Recommender<R> {
  repository: R,
  config: RecommendConfig,
}

impl<R: BookRepository> Recommender<R> {
  #[must_use]
  pub const fn new(repository: R, config: RecommendConfig) -> Self {
    Self { repository, config }
  }

  /// Up to `top_k` book ids for `user_id`, most similar first. Unmet
  /// preconditions give an empty list, never an error.
  pub async fn recommend(&self, user_id: UserId, top_k: i64) -> Result<Vec<BookId>, RecommendError> {
    Ok(self.evaluate(user_id, top_k).await?.into_ids())
  }

  /// Like `recommend`, but reports which terminal state was reached.
  #[tracing::instrument(skip(self))]
  pub async fn evaluate(&self, user_id: UserId, top_k: i64) -> Result<Recommendation, RecommendError> {
    let positives = self.repository.fetch_positives(user_id).await?;
    if positives.len() < self.config.min_positives {
      tracing::debug!(
        positives = positives.len(),
        required = self.config.min_positives,
        "not enough borrowing history"
      );
      return Ok(Recommendation::InsufficientHistory {
        positives: positives.len(),
      });
    }

    let candidates = self.repository.fetch_candidates(user_id).await?;
    if candidates.is_empty() {
      tracing::debug!("no eligible candidates");
      return Ok(Recommendation::NoCandidates);
    }

    let ids = rank_candidates(&positives, &candidates, top_k, &self.config)?;
    tracing::debug!(returned = ids.len(), "ranked candidates");

    Ok(Recommendation::Ranked(ids))
  }
}

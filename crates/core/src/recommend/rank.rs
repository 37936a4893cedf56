use std::cmp::Ordering;

use shelfwise_shared::similarity::sparse_cosine_similarity;

use super::combine::FeatureMatrix;
use super::profile::PreferenceVector;
use crate::{BookId, RecommendError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
  pub id: BookId,
  pub score: f64,
}

/// Cosine similarity of every candidate row to the preference vector, in
/// candidate order.
pub fn score_candidates(
  candidates: &FeatureMatrix,
  ids: &[BookId],
  preference: &PreferenceVector,
) -> Result<Vec<ScoredCandidate>, RecommendError> {
  if candidates.rows() != ids.len() || candidates.cols() != preference.width() {
    return Err(RecommendError::shape_mismatch(
      "candidate scoring",
      (ids.len(), preference.width()),
      candidates.shape(),
    ));
  }

  Ok(
    candidates
      .as_csr()
      .outer_iterator()
      .zip(ids)
      .map(|(row, &id)| ScoredCandidate {
        id,
        score: sparse_cosine_similarity(row.indices(), row.data(), preference.values()),
      })
      .collect(),
  )
}

/// Identifiers of the `top_k` candidates most similar to `preference`.
///
/// The sort is stable: candidates with equal scores keep their fetch order.
/// `top_k <= 0` returns nothing.
pub fn rank(
  candidates: &FeatureMatrix,
  ids: &[BookId],
  preference: &PreferenceVector,
  top_k: i64,
) -> Result<Vec<BookId>, RecommendError> {
  let mut scored = score_candidates(candidates, ids, preference)?;
  let Ok(top_k) = usize::try_from(top_k) else {
    return Ok(Vec::new());
  };

  scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
  scored.truncate(top_k);

  Ok(scored.into_iter().map(|c| c.id).collect())
}

#[cfg(test)]
mod tests {
  use ndarray::array;

  use super::*;
  use crate::BlockWeights;
  use crate::recommend::combine::combine;
  use crate::recommend::csr::CsrBuilder;
  use crate::recommend::profile::aggregate;

  /// Four candidates in a 2-d numeric space; the preference points along +x.
  fn fixture() -> (FeatureMatrix, Vec<BookId>, PreferenceVector) {
    let empty_text = |rows: usize| {
      let mut builder = CsrBuilder::new(0);
      for _ in 0..rows {
        builder.push_row(std::iter::empty());
      }
      builder.build()
    };

    let positives = combine(&empty_text(1), &array![[1.0, 0.0]], BlockWeights::default()).unwrap();
    let candidates = combine(
      &empty_text(4),
      &array![[0.0, 1.0], [1.0, 1.0], [2.0, 0.0], [1.0, 1.0]],
      BlockWeights::default(),
    )
    .unwrap();

    (candidates, vec![10, 20, 30, 40], aggregate(&positives))
  }

  #[test]
  fn ranks_by_descending_similarity_with_stable_ties() {
    let (candidates, ids, preference) = fixture();
    assert_eq!(rank(&candidates, &ids, &preference, 4).unwrap(), vec![30, 20, 40, 10]);
  }

  #[test]
  fn top_k_truncates_and_saturates() {
    let (candidates, ids, preference) = fixture();
    assert_eq!(rank(&candidates, &ids, &preference, 1).unwrap(), vec![30]);
    assert_eq!(rank(&candidates, &ids, &preference, 99).unwrap().len(), 4);
  }

  #[test]
  fn non_positive_top_k_is_empty() {
    let (candidates, ids, preference) = fixture();
    assert!(rank(&candidates, &ids, &preference, 0).unwrap().is_empty());
    assert!(rank(&candidates, &ids, &preference, -3).unwrap().is_empty());
  }

  #[test]
  fn id_count_must_match_rows() {
    let (candidates, _, preference) = fixture();
    let err = rank(&candidates, &[1, 2], &preference, 3).unwrap_err();
    assert!(matches!(err, RecommendError::ShapeMismatch { .. }));
  }
}

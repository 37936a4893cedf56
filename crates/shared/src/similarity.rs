/// Cosine similarity between a sparse row (parallel `indices` / `values`)
/// and a dense vector.
///
/// Returns a value in [-1.0, 1.0] where 1.0 means identical direction, and 0.0
/// when either side has zero norm.
pub fn sparse_cosine_similarity(indices: &[usize], values: &[f64], dense: &[f64]) -> f64 {
  debug_assert_eq!(indices.len(), values.len(), "sparse row is malformed");

  let mut dot = 0.0_f64;
  let mut norm_sparse = 0.0_f64;

  for (&idx, &x) in indices.iter().zip(values.iter()) {
    if let Some(&y) = dense.get(idx) {
      dot = x.mul_add(y, dot);
    }
    norm_sparse = x.mul_add(x, norm_sparse);
  }

  let denom = norm_sparse.sqrt() * l2_norm(dense);
  if denom < 1e-12 {
    return 0.0;
  }

  dot / denom
}

/// Euclidean length of a dense vector.
pub fn l2_norm(v: &[f64]) -> f64 {
  v.iter().fold(0.0_f64, |acc, &x| x.mul_add(x, acc)).sqrt()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identical_direction_scores_one() {
    let score = sparse_cosine_similarity(&[0, 2], &[1.0, 2.0], &[2.0, 0.0, 4.0]);
    assert!((score - 1.0).abs() < 1e-12);
  }

  #[test]
  fn orthogonal_scores_zero() {
    let score = sparse_cosine_similarity(&[1], &[3.0], &[1.0, 0.0, 1.0]);
    assert!(score.abs() < 1e-12);
  }

  #[test]
  fn opposite_direction_scores_minus_one() {
    let score = sparse_cosine_similarity(&[0, 1], &[1.0, 1.0], &[-1.0, -1.0]);
    assert!((score + 1.0).abs() < 1e-12);
  }

  #[test]
  fn zero_norm_is_zero_not_nan() {
    assert_eq!(sparse_cosine_similarity(&[], &[], &[1.0, 2.0]), 0.0);
    assert_eq!(sparse_cosine_similarity(&[0], &[1.0], &[0.0, 0.0]), 0.0);
    assert_eq!(sparse_cosine_similarity(&[], &[], &[]), 0.0);
  }
}

use sea_orm::DbErr;
use thiserror::Error;

/// Matrix dimensions as `(rows, cols)`.
pub type Shape = (usize, usize);

#[derive(Debug, Error)]
pub enum RecommendError {
  /// Internal invariant violated while assembling feature blocks.
  #[error("shape mismatch in {context}: expected {expected:?}, got {actual:?}")]
  ShapeMismatch {
    context: &'static str,
    expected: Shape,
    actual: Shape,
  },

  /// The catalogue store could not be read.
  #[error("failed to read the catalogue: {0}")]
  DataAccess(#[from] DbErr),
}

impl RecommendError {
  pub(crate) const fn shape_mismatch(context: &'static str, expected: Shape, actual: Shape) -> Self {
    Self::ShapeMismatch {
      context,
      expected,
      actual,
    }
  }
}

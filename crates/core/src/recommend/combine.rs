use ndarray::Array2;
use sprs::CsMat;

use super::csr::CsrBuilder;
use crate::{BlockWeights, RecommendError};

/// One row per book: the weighted text block followed by the weighted numeric
/// block.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
  matrix: CsMat<f64>,
}

impl FeatureMatrix {
  #[must_use]
  pub fn rows(&self) -> usize {
    self.matrix.rows()
  }

  #[must_use]
  pub fn cols(&self) -> usize {
    self.matrix.cols()
  }

  #[must_use]
  pub fn shape(&self) -> (usize, usize) {
    self.matrix.shape()
  }

  #[must_use]
  pub const fn as_csr(&self) -> &CsMat<f64> {
    &self.matrix
  }
}

/// Concatenate `weights.text * text` and `weights.numeric * numeric`
/// column-wise. Both blocks must have the same number of rows.
pub fn combine(
  text: &CsMat<f64>,
  numeric: &Array2<f64>,
  weights: BlockWeights,
) -> Result<FeatureMatrix, RecommendError> {
  if text.rows() != numeric.nrows() {
    return Err(RecommendError::shape_mismatch(
      "text/numeric row alignment",
      (text.rows(), numeric.ncols()),
      numeric.dim(),
    ));
  }

  let offset = text.cols();
  let mut builder = CsrBuilder::new(offset + numeric.ncols());

  for (text_row, numeric_row) in text.outer_iterator().zip(numeric.rows()) {
    let text_part = text_row
      .iter()
      .map(|(j, &w)| (j, weights.text * w));
    let numeric_part = numeric_row
      .iter()
      .enumerate()
      .map(|(j, &x)| (offset + j, weights.numeric * x));
    builder.push_row(text_part.chain(numeric_part));
  }

  Ok(FeatureMatrix {
    matrix: builder.build(),
  })
}

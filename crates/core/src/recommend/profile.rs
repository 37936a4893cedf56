use ndarray::Array1;

use super::combine::FeatureMatrix;

/// Centroid of the user's borrowed books in feature space.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceVector(Array1<f64>);

impl PreferenceVector {
  #[must_use]
  pub fn width(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn values(&self) -> &[f64] {
    self.0.as_slice().unwrap_or_default()
  }
}

/// Column-wise mean of `positives`. Every book counts the same.
#[must_use]
pub fn aggregate(positives: &FeatureMatrix) -> PreferenceVector {
  let mut centroid = Array1::<f64>::zeros(positives.cols());

  for row in positives.as_csr().outer_iterator() {
    for (j, &w) in row.iter() {
      centroid[j] += w;
    }
  }
  if positives.rows() > 0 {
    centroid /= positives.rows() as f64;
  }

  PreferenceVector(centroid)
}

#[cfg(test)]
mod tests {
  use ndarray::array;

  use super::*;
  use crate::BlockWeights;
  use crate::recommend::combine::combine;
  use crate::recommend::csr::CsrBuilder;

  #[test]
  fn centroid_is_the_column_mean() {
    let mut text = CsrBuilder::new(2);
    text.push_row([(0, 1.0)]);
    text.push_row([(1, 1.0)]);
    text.push_row([(0, 1.0)]);
    let numeric = array![[3.0], [0.0], [0.0]];

    let positives = combine(&text.build(), &numeric, BlockWeights::default()).unwrap();
    let preference = aggregate(&positives);

    assert_eq!(preference.width(), 3);
    let expected = [2.0 / 3.0, 1.0 / 3.0, 1.0];
    for (got, want) in preference.values().iter().zip(expected) {
      assert!((got - want).abs() < 1e-12);
    }
  }
}

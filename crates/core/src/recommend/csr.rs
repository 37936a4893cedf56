use sprs::CsMat;

use crate::RecommendError;

/// Row-by-row assembly of a CSR matrix with a fixed column count.
pub(crate) struct CsrBuilder {
  cols: usize,
  indptr: Vec<usize>,
  indices: Vec<usize>,
  data: Vec<f64>,
}

impl CsrBuilder {
  pub fn new(cols: usize) -> Self {
    Self {
      cols,
      indptr: vec![0],
      indices: Vec::new(),
      data: Vec::new(),
    }
  }

  /// Append one row. Entries must come in ascending column order; zeros are
  /// dropped.
  pub fn push_row<I>(&mut self, entries: I)
  where
    I: IntoIterator<Item = (usize, f64)>,
  {
    for (col, value) in entries {
      debug_assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
      if value != 0.0 {
        self.indices.push(col);
        self.data.push(value);
      }
    }
    self.indptr.push(self.indices.len());
  }

  pub fn build(self) -> CsMat<f64> {
    let rows = self.indptr.len() - 1;
    CsMat::new((rows, self.cols), self.indptr, self.indices, self.data)
  }
}

/// Split a CSR matrix into rows `[0, at)` and `[at, rows)`.
pub fn split_rows(
  matrix: &CsMat<f64>,
  at: usize,
) -> Result<(CsMat<f64>, CsMat<f64>), RecommendError> {
  if at > matrix.rows() {
    return Err(RecommendError::shape_mismatch(
      "row split",
      (at, matrix.cols()),
      matrix.shape(),
    ));
  }

  let mut head = CsrBuilder::new(matrix.cols());
  let mut tail = CsrBuilder::new(matrix.cols());

  for (i, row) in matrix.outer_iterator().enumerate() {
    let entries = row.iter().map(|(col, &value)| (col, value));
    if i < at {
      head.push_row(entries);
    } else {
      tail.push_row(entries);
    }
  }

  Ok((head.build(), tail.build()))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> CsMat<f64> {
    let mut builder = CsrBuilder::new(3);
    builder.push_row([(0, 1.0), (2, 2.0)]);
    builder.push_row(std::iter::empty());
    builder.push_row([(1, 3.0)]);
    builder.build()
  }

  #[test]
  fn builder_keeps_shape_and_drops_zeros() {
    let mut builder = CsrBuilder::new(2);
    builder.push_row([(0, 0.0), (1, 5.0)]);
    let m = builder.build();
    assert_eq!(m.shape(), (1, 2));
    assert_eq!(m.nnz(), 1);
    assert_eq!(m.get(0, 1), Some(&5.0));
  }

  #[test]
  fn split_preserves_rows_on_both_sides() {
    let (head, tail) = split_rows(&sample(), 2).unwrap();
    assert_eq!(head.shape(), (2, 3));
    assert_eq!(tail.shape(), (1, 3));
    assert_eq!(head.get(0, 2), Some(&2.0));
    assert_eq!(tail.get(0, 1), Some(&3.0));
  }

  #[test]
  fn split_of_zero_column_matrix() {
    let mut builder = CsrBuilder::new(0);
    builder.push_row(std::iter::empty());
    builder.push_row(std::iter::empty());
    let (head, tail) = split_rows(&builder.build(), 1).unwrap();
    assert_eq!(head.shape(), (1, 0));
    assert_eq!(tail.shape(), (1, 0));
  }

  #[test]
  fn split_past_the_end_is_a_shape_mismatch() {
    let err = split_rows(&sample(), 4).unwrap_err();
    assert!(matches!(err, RecommendError::ShapeMismatch { .. }));
  }
}

use ndarray::{Array1, Array2, Axis, s};

use crate::BookRecord;

/// `[rating, page_count]`
pub const NUMERIC_COLUMNS: usize = 2;

/// Raw numeric features of one book, missing values read as 0.
#[must_use]
pub fn numeric_features(book: &BookRecord) -> [f64; NUMERIC_COLUMNS] {
  [
    book.rating.unwrap_or(0.0),
    book.page_count.map(f64::from).unwrap_or(0.0),
  ]
}

/// Per-column zero-mean / unit-variance transform.
#[derive(Debug, Clone)]
pub struct StandardScaler {
  mean: Array1<f64>,
  std: Array1<f64>,
}

impl StandardScaler {
  /// Column statistics over every row of `data` (population variance).
  #[must_use]
  pub fn fit(data: &Array2<f64>) -> Self {
    let mut mean = Array1::zeros(data.ncols());
    let mut std = Array1::zeros(data.ncols());

    for (j, column) in data.axis_iter(Axis(1)).enumerate() {
      let (lo, hi) = column
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
      mean[j] = column.mean().unwrap_or(0.0);
      // constant columns keep std = 0 so `transform` maps them to 0
      std[j] = if hi > lo { column.var(0.0).sqrt() } else { 0.0 };
    }

    Self { mean, std }
  }

  /// Standardize `data`. Columns with zero spread become all zeros.
  #[must_use]
  pub fn transform(&self, data: &Array2<f64>) -> Array2<f64> {
    let mut out = data.clone();
    for (j, mut column) in out.axis_iter_mut(Axis(1)).enumerate() {
      let (mean, std) = (self.mean[j], self.std[j]);
      if std > 0.0 {
        column.mapv_inplace(|x| (x - mean) / std);
      } else {
        column.fill(0.0);
      }
    }
    out
  }
}

/// Numeric blocks for positives and candidates, standardized with
/// statistics taken over both sets together.
#[must_use]
pub fn standardize(positives: &[BookRecord], candidates: &[BookRecord]) -> (Array2<f64>, Array2<f64>) {
  let books: Vec<&BookRecord> = positives.iter().chain(candidates).collect();
  let raw = Array2::from_shape_fn((books.len(), NUMERIC_COLUMNS), |(i, j)| {
    numeric_features(books[i])[j]
  });

  let scaled = StandardScaler::fit(&raw).transform(&raw);
  let n_pos = positives.len();
  (
    scaled.slice(s![..n_pos, ..]).to_owned(),
    scaled.slice(s![n_pos.., ..]).to_owned(),
  )
}

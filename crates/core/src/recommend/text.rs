use std::collections::HashMap;

use sprs::CsMat;

use super::csr::CsrBuilder;
use crate::BookRecord;

/// Placed between fields so the n-gram model never sees a bigram spanning two
/// fields.
pub const FIELD_SEPARATOR: &str = " [SEP] ";

const SEPARATOR_TOKEN: &str = "[SEP]";

/// Flatten a book into `title [SEP] genre [SEP] author [SEP] description`.
#[must_use]
pub fn build_text(book: &BookRecord) -> String {
  [
    book.title.as_str(),
    book.genre.as_str(),
    book.author.as_str(),
    book.description.as_deref().unwrap_or_default(),
  ]
  .join(FIELD_SEPARATOR)
}

/// Lowercased word tokens of at least two characters.
fn tokenize(text: &str) -> Vec<String> {
  text
    .to_lowercase()
    .split(|c: char| !(c.is_alphanumeric() || c == '_'))
    .filter(|token| token.chars().count() >= 2)
    .map(str::to_owned)
    .collect()
}

/// Smoothed inverse document frequency, as if one extra document contained
/// every term.
fn smooth_idf(n_docs: usize, doc_freq: usize) -> f64 {
  ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Output of a joint fit: the kept terms in column order and one
/// L2-normalized row per input document.
#[derive(Debug, Clone)]
pub struct TextBlock {
  pub vocabulary: Vec<String>,
  pub matrix: CsMat<f64>,
}

/// Bag-of-n-grams model with tf-idf weighting.
///
/// The model is fitted and applied in one pass over a single corpus; nothing
/// is kept between calls.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
  max_features: usize,
  ngram_range: (usize, usize),
}

impl TfidfVectorizer {
  #[must_use]
  pub fn new(max_features: usize, ngram_range: (usize, usize)) -> Self {
    let min_n = ngram_range.0.max(1);
    Self {
      max_features,
      ngram_range: (min_n, ngram_range.1.max(min_n)),
    }
  }

  /// N-gram terms of one document. N-grams never cross a field separator.
  fn analyze(&self, text: &str) -> Vec<String> {
    let (min_n, max_n) = self.ngram_range;
    let mut terms = Vec::new();

    for field in text.split(SEPARATOR_TOKEN) {
      let tokens = tokenize(field);
      for n in min_n..=max_n {
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
      }
    }

    terms
  }

  /// Most frequent terms across the corpus, capped at `max_features`, then
  /// sorted alphabetically to fix the column order.
  fn select_vocabulary<'a>(&self, corpus_freq: &HashMap<&'a str, usize>) -> Vec<&'a str> {
    let mut terms: Vec<(&str, usize)> = corpus_freq.iter().map(|(t, &f)| (*t, f)).collect();

    if terms.len() > self.max_features {
      terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
      terms.truncate(self.max_features);
    }

    let mut vocabulary: Vec<&str> = terms.into_iter().map(|(t, _)| t).collect();
    vocabulary.sort_unstable();
    vocabulary
  }

  /// Fit the vocabulary and idf weights on `documents` and return their
  /// weighted matrix in the same row order.
  ///
  /// A corpus without a single usable token yields a zero-column matrix.
  pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TextBlock {
    let term_counts: Vec<HashMap<String, usize>> = documents
      .iter()
      .map(|doc| {
        let mut counts = HashMap::new();
        for term in self.analyze(doc.as_ref()) {
          *counts.entry(term).or_insert(0) += 1;
        }
        counts
      })
      .collect();

    let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for counts in &term_counts {
      for (term, &count) in counts {
        *corpus_freq.entry(term.as_str()).or_insert(0) += count;
        *doc_freq.entry(term.as_str()).or_insert(0) += 1;
      }
    }

    let vocabulary = self.select_vocabulary(&corpus_freq);
    let column: HashMap<&str, usize> = vocabulary
      .iter()
      .enumerate()
      .map(|(j, term)| (*term, j))
      .collect();
    let idf: Vec<f64> = vocabulary
      .iter()
      .map(|term| smooth_idf(documents.len(), doc_freq.get(term).copied().unwrap_or(0)))
      .collect();

    let mut builder = CsrBuilder::new(vocabulary.len());
    for counts in &term_counts {
      let mut row: Vec<(usize, f64)> = counts
        .iter()
        .filter_map(|(term, &count)| {
          column
            .get(term.as_str())
            .map(|&j| (j, count as f64 * idf[j]))
        })
        .collect();
      row.sort_unstable_by_key(|&(j, _)| j);

      let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
      if norm > 0.0 {
        for (_, w) in &mut row {
          *w /= norm;
        }
      }
      builder.push_row(row);
    }

    TextBlock {
      vocabulary: vocabulary.into_iter().map(str::to_owned).collect(),
      matrix: builder.build(),
    }
  }
}

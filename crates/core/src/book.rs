use sea_orm::FromQueryResult;
use serde::Serialize;

pub type BookId = i32;
pub type UserId = i32;

/// Read-only snapshot of a catalogue entry, as seen by the recommender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRecord {
  pub id: BookId,
  pub title: String,
  pub author: String,
  pub genre: String,
  pub description: Option<String>,
  pub page_count: Option<i32>,
  pub rating: Option<f64>,
}

impl BookRecord {
  /// A record with only the identifier and title set; the rest is empty.
  #[must_use]
  pub fn new(id: BookId, title: impl Into<String>) -> Self {
    Self {
      id,
      title: title.into(),
      author: String::new(),
      genre: String::new(),
      description: None,
      page_count: None,
      rating: None,
    }
  }

  #[must_use]
  pub fn author(mut self, author: impl Into<String>) -> Self {
    self.author = author.into();
    self
  }

  #[must_use]
  pub fn genre(mut self, genre: impl Into<String>) -> Self {
    self.genre = genre.into();
    self
  }

  #[must_use]
  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  #[must_use]
  pub fn page_count(mut self, page_count: i32) -> Self {
    self.page_count = Some(page_count);
    self
  }

  #[must_use]
  pub fn rating(mut self, rating: f64) -> Self {
    self.rating = Some(rating);
    self
  }
}

/// Raw row shape shared by both catalogue queries. Every column is nullable
/// here so a sparse legacy row never fails to decode.
#[derive(Debug, FromQueryResult)]
pub(crate) struct BookRow {
  pub id: i32,
  pub title: Option<String>,
  pub author: Option<String>,
  pub genre: Option<String>,
  pub description: Option<String>,
  pub page_count: Option<i32>,
  pub rating: Option<f64>,
}

impl From<BookRow> for BookRecord {
  fn from(row: BookRow) -> Self {
    Self {
      id: row.id,
      title: row.title.unwrap_or_default(),
      author: row.author.unwrap_or_default(),
      genre: row.genre.unwrap_or_default(),
      description: row.description,
      // a negative page count is a data-entry error, not a signal
      page_count: row.page_count.filter(|p| *p >= 0),
      rating: row.rating,
    }
  }
}

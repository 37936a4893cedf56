use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use sea_orm::DbErr;

use super::BookRepository;
use crate::{BookId, BookRecord, RecommendError, UserId};

#[derive(Debug, Clone)]
struct ShelvedBook {
  record: BookRecord,
  is_available: bool,
  is_archived: Option<bool>,
}

/// In-process catalogue with the same filtering rules as the Postgres
/// repository. Books are keyed by id, so inserting an id twice replaces it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
  books: BTreeMap<BookId, ShelvedBook>,
  borrows: Vec<(UserId, BookId)>,
  outage: Option<String>,
}

impl InMemoryBookRepository {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Add an available, non-archived book.
  #[must_use]
  pub fn with_book(self, record: BookRecord) -> Self {
    self.with_shelved_book(record, true, Some(false))
  }

  /// Add a book with explicit shelf flags. `is_archived = None` models a
  /// legacy row where the flag was never set.
  #[must_use]
  pub fn with_shelved_book(
    mut self,
    record: BookRecord,
    is_available: bool,
    is_archived: Option<bool>,
  ) -> Self {
    self.books.insert(
      record.id,
      ShelvedBook {
        record,
        is_available,
        is_archived,
      },
    );
    self
  }

  /// Record that `user_id` borrowed `book_id`. Repeated borrows are allowed.
  #[must_use]
  pub fn with_borrow(mut self, user_id: UserId, book_id: BookId) -> Self {
    self.borrows.push((user_id, book_id));
    self
  }

  /// Make every subsequent fetch fail as if the store were unreachable.
  #[must_use]
  pub fn with_outage(mut self, reason: impl Into<String>) -> Self {
    self.outage = Some(reason.into());
    self
  }

  fn check_reachable(&self) -> Result<(), RecommendError> {
    match &self.outage {
      Some(reason) => Err(DbErr::Custom(reason.clone()).into()),
      None => Ok(()),
    }
  }

  fn borrowed_by(&self, user_id: UserId) -> BTreeSet<BookId> {
    self
      .borrows
      .iter()
      .filter(|(user, _)| *user == user_id)
      .map(|(_, book)| *book)
      .collect()
  }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
  async fn fetch_positives(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    self.check_reachable()?;

    // borrow records pointing at unknown books are dropped, like the SQL join
    Ok(
      self
        .borrowed_by(user_id)
        .into_iter()
        .filter_map(|id| self.books.get(&id))
        .map(|book| book.record.clone())
        .collect(),
    )
  }

  async fn fetch_candidates(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    self.check_reachable()?;

    let borrowed = self.borrowed_by(user_id);
    Ok(
      self
        .books
        .values()
        .filter(|book| book.is_available && book.is_archived != Some(true))
        .filter(|book| !borrowed.contains(&book.record.id))
        .map(|book| book.record.clone())
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn library() -> InMemoryBookRepository {
    InMemoryBookRepository::new()
      .with_book(BookRecord::new(1, "Dune"))
      .with_book(BookRecord::new(2, "Hyperion"))
      .with_shelved_book(BookRecord::new(3, "Old Atlas"), true, Some(true))
      .with_shelved_book(BookRecord::new(4, "On Loan"), false, Some(false))
      .with_shelved_book(BookRecord::new(5, "Legacy Row"), true, None)
      .with_book(BookRecord::new(6, "Neuromancer"))
      .with_borrow(10, 2)
      .with_borrow(10, 2)
      .with_borrow(10, 4)
      .with_borrow(11, 1)
  }

  #[tokio::test]
  async fn positives_are_distinct_and_ordered() {
    let ids: Vec<_> = library()
      .fetch_positives(10)
      .await
      .unwrap()
      .into_iter()
      .map(|b| b.id)
      .collect();
    assert_eq!(ids, vec![2, 4]);
  }

  #[tokio::test]
  async fn candidates_skip_archived_unavailable_and_borrowed() {
    let ids: Vec<_> = library()
      .fetch_candidates(10)
      .await
      .unwrap()
      .into_iter()
      .map(|b| b.id)
      .collect();
    assert_eq!(ids, vec![1, 5, 6]);
  }

  #[tokio::test]
  async fn outage_surfaces_as_data_access_error() {
    let repo = library().with_outage("connection refused");
    let err = repo.fetch_positives(10).await.unwrap_err();
    assert!(matches!(err, RecommendError::DataAccess(_)));
  }
}

mod memory;
pub use memory::InMemoryBookRepository;

mod postgres;
pub use postgres::PgBookRepository;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{BookRecord, RecommendError, UserId};

/// Read-only access to the two catalogue views the recommender needs.
///
/// Implementations return books ordered by id with no duplicates.
#[async_trait]
pub trait BookRepository: Send + Sync {
  /// Every book the user has a borrow record for.
  async fn fetch_positives(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError>;

  /// Books that are available, not archived and never borrowed by the user.
  async fn fetch_candidates(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError>;
}

#[async_trait]
impl<R> BookRepository for Arc<R>
where
  R: BookRepository + ?Sized,
{
  async fn fetch_positives(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    (**self).fetch_positives(user_id).await
  }

  async fn fetch_candidates(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    (**self).fetch_candidates(user_id).await
  }
}

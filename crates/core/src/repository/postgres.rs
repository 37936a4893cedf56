use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use super::BookRepository;
use crate::book::BookRow;
use crate::{BookRecord, RecommendError, UserId};

/// Books the user has borrowed at least once.
const POSITIVES_SQL: &str = r#"
  SELECT DISTINCT
    b."Id"          AS id,
    b."Title"       AS title,
    b."Author"      AS author,
    b."Genre"       AS genre,
    b."Description" AS description,
    b."PageCount"   AS page_count,
    b."Rating"      AS rating
  FROM "BorrowRecords" r
  JOIN "Books" b ON b."Id" = r."BookId"
  WHERE r."UserId" = $1
  ORDER BY id;
"#;

/// Shelved books the user has never borrowed.
const CANDIDATES_SQL: &str = r#"
  SELECT
    b."Id"          AS id,
    b."Title"       AS title,
    b."Author"      AS author,
    b."Genre"       AS genre,
    b."Description" AS description,
    b."PageCount"   AS page_count,
    b."Rating"      AS rating
  FROM "Books" b
  WHERE (b."IsArchived" = FALSE OR b."IsArchived" IS NULL)
    AND b."IsAvailable" = TRUE
    AND NOT EXISTS (
      SELECT 1 FROM "BorrowRecords" r
      WHERE r."BookId" = b."Id" AND r."UserId" = $1
    )
  ORDER BY b."Id";
"#;

/// Catalogue reads against the library application's Postgres schema.
#[derive(Clone)]
pub struct PgBookRepository {
  db: DatabaseConnection,
}

impl PgBookRepository {
  #[must_use]
  pub const fn new(db: DatabaseConnection) -> Self {
    Self { db }
  }

  /// Round-trip the connection once; used as a startup health check.
  pub async fn ping(&self) -> Result<(), RecommendError> {
    self.db.ping().await?;
    Ok(())
  }

  async fn query_books(&self, sql: &str, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, vec![user_id.into()]);

    let rows = self.db.query_all_raw(stmt).await?;
    let mut books = Vec::with_capacity(rows.len());

    for row in rows {
      let row = BookRow::from_query_result(&row, "")?;
      books.push(BookRecord::from(row));
    }

    Ok(books)
  }
}

#[async_trait]
impl BookRepository for PgBookRepository {
  async fn fetch_positives(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    self.query_books(POSITIVES_SQL, user_id).await
  }

  async fn fetch_candidates(&self, user_id: UserId) -> Result<Vec<BookRecord>, RecommendError> {
    self.query_books(CANDIDATES_SQL, user_id).await
  }
}

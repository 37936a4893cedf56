mod book;
pub use book::{BookId, BookRecord, UserId};

mod config;
pub use config::{BlockWeights, DEFAULT_TOP_K, MAX_FEATURES, MIN_POSITIVES, RecommendConfig};

mod error;
pub use error::{RecommendError, Shape};

mod repository;
pub use repository::{BookRepository, InMemoryBookRepository, PgBookRepository};

pub mod recommend;
pub use recommend::{Recommendation, Recommender, rank_candidates};

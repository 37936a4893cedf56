use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;
use shelfwise_core::{BookId, DEFAULT_TOP_K, UserId};
use shelfwise_shared::AppError;
use utoipa::IntoParams;

use crate::utils::AppState;

const fn default_top_k() -> i64 {
  DEFAULT_TOP_K
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendSimilar {
  /// Reader to recommend for
  pub user_id: UserId,
  /// Maximum number of book ids to return (default 3); zero or less returns none
  #[serde(default = "default_top_k")]
  pub top_k: i64,
}

/// Recommend books similar to the reader's borrowing history
#[utoipa::path(
  get,
  path = "/recommend_similar",
  params(RecommendSimilar),
  responses(
    (status = 200, description = "Book ids, most similar first; empty when the reader has too little history or nothing is left to recommend", body = Vec<i32>),
    (status = 400, description = "Missing or malformed query parameters"),
    (status = 500, description = "Catalogue unreachable or internal failure")
  )
)]
#[axum::debug_handler]
pub async fn recommend_similar(
  State(state): State<AppState>,
  Query(params): Query<RecommendSimilar>,
) -> Result<Json<Vec<BookId>>, AppError> {
  let ids = state
    .recommender
    .recommend(params.user_id, params.top_k)
    .await?;

  Ok(Json(ids))
}

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod recommend_similar;

pub use recommend_similar::RecommendSimilar;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Shelfwise API",
    version = "0.0.1",
    description = "Content-based book recommendations from a reader's borrowing history"
  ),
  paths(recommend_similar::recommend_similar)
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route(
      "/recommend_similar",
      get(recommend_similar::recommend_similar),
    )
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}

use std::sync::Arc;

use axum::{
  body::{Body, to_bytes},
  http::{Request, StatusCode},
};
use shelfwise_core::{BookRecord, InMemoryBookRepository, RecommendConfig};
use shelfwise_server::{app, utils::AppState};
use tower::ServiceExt;

fn state(repo: InMemoryBookRepository) -> AppState {
  AppState::new(Arc::new(repo), RecommendConfig::default())
}

fn library() -> InMemoryBookRepository {
  let mut repo = InMemoryBookRepository::new();
  for (id, title, genre) in [
    (1, "Dune", "SciFi"),
    (2, "Hyperion", "SciFi"),
    (3, "Solaris", "SciFi"),
    (4, "Neuromancer", "SciFi"),
    (5, "Emma", "Romance"),
    (6, "Persuasion", "Romance"),
    (7, "Snow Crash", "SciFi"),
  ] {
    repo = repo.with_book(BookRecord::new(id, title).genre(genre).rating(4.0).page_count(300));
  }
  repo.with_borrow(1, 1).with_borrow(1, 2).with_borrow(1, 3)
}

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
  let response = app(state)
    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
    .await
    .unwrap();
  let status = response.status();
  let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
  (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn defaults_to_three_recommendations() {
  let (status, body) = get(state(library()), "/recommend_similar?user_id=1").await;
  assert_eq!(status, StatusCode::OK);

  let ids: Vec<i32> = serde_json::from_str(&body).unwrap();
  assert_eq!(ids.len(), 3);
  assert!(ids.iter().all(|id| (4..=7).contains(id)), "{ids:?}");
}

#[tokio::test]
async fn honours_top_k() {
  let (status, body) = get(state(library()), "/recommend_similar?user_id=1&top_k=10").await;
  assert_eq!(status, StatusCode::OK);
  let ids: Vec<i32> = serde_json::from_str(&body).unwrap();
  assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn unknown_reader_gets_an_empty_list() {
  let (status, body) = get(state(library()), "/recommend_similar?user_id=42").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "[]");
}

#[tokio::test]
async fn malformed_user_id_is_rejected() {
  let (status, _) = get(state(library()), "/recommend_similar?user_id=abc").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_outage_is_an_internal_error() {
  let repo = library().with_outage("connection refused");
  let (status, body) = get(state(repo), "/recommend_similar?user_id=1").await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body.contains("connection refused"), "{body}");
}

#[tokio::test]
async fn serves_openapi_document() {
  let (status, body) = get(state(library()), "/openapi.json").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("/recommend_similar"));
}

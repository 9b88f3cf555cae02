use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use movie_recommender::{
    catalog::{Catalog, DemographicRanking, RankedMovie, SimilarityMatrix},
    db::ArtifactStore,
    error::{AppError, AppResult},
    models::{Movie, MovieId, Poster},
    routes::{create_router, ApiSettings, AppState},
    services::{PosterProvider, RecommenderContext},
};

/// Serves a fixed URL per movie; movie 3 has no poster.
#[derive(Clone)]
struct StubPosters;

#[async_trait::async_trait]
impl PosterProvider for StubPosters {
    async fn fetch_poster(&self, movie_id: &MovieId) -> AppResult<Poster> {
        if movie_id.0 == 3 {
            return Err(AppError::NotFound(format!("No poster for movie {}", movie_id)));
        }
        Ok(Poster {
            movie_id: *movie_id,
            url: format!("https://image.test/w500/{}.jpg", movie_id),
            fetched_at: Utc::now(),
        })
    }

    fn clone_for_task(&self) -> Box<dyn PosterProvider> {
        Box::new(self.clone())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn create_test_server() -> TestServer {
    let catalog = Catalog::new(vec![
        Movie::new(1, "A"),
        Movie::new(2, "B"),
        Movie::new(3, "C"),
        Movie::new(4, "D"),
    ]);
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.8, 0.3, 0.5],
        vec![0.8, 1.0, 0.2, 0.4],
        vec![0.3, 0.2, 1.0, 0.9],
        vec![0.5, 0.4, 0.9, 1.0],
    ])
    .unwrap();

    let mut store = ArtifactStore::from_parts(catalog, matrix).unwrap();
    store.ranking = DemographicRanking::new(
        (1..=12)
            .map(|i| RankedMovie {
                movie_id: MovieId(100 + i),
                title: format!("Ranked {}", i),
                score: Some(9.0 - i as f64 * 0.1),
            })
            .collect(),
    );

    let state = AppState {
        recommender: RecommenderContext::new(store),
        posters: Arc::new(StubPosters),
        settings: ApiSettings {
            recommendation_count: 2,
            top_movies_count: 10,
        },
    };

    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me-42"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "trace-me-42");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = create_test_server();
    let response = server.get("/health").await;
    let id = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_list_movies_in_catalog_order() {
    let server = create_test_server();
    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let movies: Vec<Value> = response.json();
    let titles: Vec<&str> = movies.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["A", "B", "C", "D"]);
    assert_eq!(movies[0]["movie_id"], 1);
}

#[tokio::test]
async fn test_recommendations_by_title_use_default_k() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "A")
        .await;
    response.assert_status_ok();

    let cards: Vec<Value> = response.json();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "B");
    assert_eq!(cards[0]["score"], 0.8);
    assert_eq!(cards[0]["poster_url"], "https://image.test/w500/2.jpg");
    assert_eq!(cards[1]["title"], "D");
    assert_eq!(cards[1]["score"], 0.5);
}

#[tokio::test]
async fn test_recommendations_by_id_with_missing_poster() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("movie_id", 4)
        .add_query_param("k", 1)
        .await;
    response.assert_status_ok();

    let cards: Vec<Value> = response.json();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["movie_id"], 3);
    assert!(cards[0]["poster_url"].is_null());
}

#[tokio::test]
async fn test_recommendations_clamp_k() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "C")
        .add_query_param("k", 10)
        .await;
    response.assert_status_ok();

    let cards: Vec<Value> = response.json();
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|c| c["title"] != "C"));
}

#[tokio::test]
async fn test_recommendations_unknown_movie() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Nope")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Nope"));
}

#[tokio::test]
async fn test_recommendations_zero_k() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "A")
        .add_query_param("k", 0)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendations_require_a_key() {
    let server = create_test_server();
    let response = server.get("/api/v1/recommendations").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommendations_blank_title_is_bad_request() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "   ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_top_movies_default_limit() {
    let server = create_test_server();
    let response = server.get("/api/v1/movies/top").await;
    response.assert_status_ok();

    let cards: Vec<Value> = response.json();
    assert_eq!(cards.len(), 10);
    assert_eq!(cards[0]["title"], "Ranked 1");
    assert_eq!(cards[0]["poster_url"], "https://image.test/w500/101.jpg");
}

#[tokio::test]
async fn test_top_movies_custom_limit() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/movies/top")
        .add_query_param("limit", 3)
        .await;
    response.assert_status_ok();

    let cards: Vec<Value> = response.json();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[2]["title"], "Ranked 3");
}

#[tokio::test]
async fn test_top_movies_zero_limit() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/movies/top")
        .add_query_param("limit", 0)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

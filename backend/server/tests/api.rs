use std::{fs, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use bank::{Catalog, Project};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use server::{
    app,
    config::{Config, UnavailablePolicy},
    state::AppState,
};
use tower::ServiceExt;

fn project(title: &str, category: &str, difficulty: &str) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{title} description"),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
    }
}

fn default_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        project("A", "Web", "easy"),
        project("B", "Web API", "hard"),
        project("C", "Game", "easy"),
    ])
}

fn router(catalog: Catalog, policy: UnavailablePolicy) -> Router {
    let mut config = default_config();
    config.unavailable_policy = policy;

    app(AppState::with_catalog(config, catalog))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn lists_all_projects_in_order() {
    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/projects",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["A", "B", "C"]);
    assert_eq!(
        body[0],
        json!({
            "title": "A",
            "description": "A description",
            "category": "Web",
            "difficulty": "easy"
        })
    );
}

#[tokio::test]
async fn filters_projects() {
    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/projects?category=web",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["A", "B"]);

    let (_, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/projects?difficulty=EASY",
    )
    .await;
    assert_eq!(titles(&body), ["A", "C"]);

    let (_, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/projects?category=web%20api&search=b%20desc",
    )
    .await;
    assert_eq!(titles(&body), ["B"]);
}

#[tokio::test]
async fn no_matches_is_an_empty_list() {
    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/projects?difficulty=medium",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn random_respects_filters() {
    for _ in 0..20 {
        let (status, body) = get(
            router(sample_catalog(), UnavailablePolicy::Error),
            "/api/random?difficulty=easy&category=web",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "A");
    }
}

#[tokio::test]
async fn random_without_match_is_not_found() {
    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/random?difficulty=impossible",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "No project found for these criteria" }));
}

#[tokio::test]
async fn aggregations() {
    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/categories",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "categories": ["Game", "Web", "Web API"] }));

    let (_, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/difficulties",
    )
    .await;
    assert_eq!(body, json!({ "difficulties": ["easy", "hard"] }));

    let (_, body) = get(router(sample_catalog(), UnavailablePolicy::Error), "/api/stats").await;
    assert_eq!(body, json!({ "total_projects": 3, "categories": 3, "difficulties": 2 }));

    let (_, body) = get(router(sample_catalog(), UnavailablePolicy::Error), "/health").await;
    assert_eq!(
        body,
        json!({
            "status": "healthy",
            "projects_loaded": 3,
            "message": "InspiCode API is running!"
        })
    );
}

#[tokio::test]
async fn unavailable_catalog_errors_by_default() {
    let unavailable = || router(Catalog::unavailable("missing file"), UnavailablePolicy::Error);

    let (status, body) = get(unavailable(), "/api/projects").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "No projects available" }));

    let (status, _) = get(unavailable(), "/api/random").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get(unavailable(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "categories": [] }));

    let (status, body) = get(unavailable(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total_projects": 0, "categories": 0, "difficulties": 0 }));

    let (status, body) = get(unavailable(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["projects_loaded"], 0);
}

#[tokio::test]
async fn repeated_query_keys_keep_last_value() {
    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/projects?difficulty=hard&difficulty=easy",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["A", "C"]);

    let (status, body) = get(
        router(sample_catalog(), UnavailablePolicy::Error),
        "/api/random?category=game&category=web%20api",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "B");
}

#[tokio::test]
async fn catalog_without_valid_entries_is_unavailable() {
    let unavailable = || router(Catalog::from_parts(Vec::new(), 2), UnavailablePolicy::Error);

    let (status, body) = get(unavailable(), "/api/projects").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "No projects available" }));

    let (status, _) = get(unavailable(), "/api/random").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get(unavailable(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "degraded",
            "projects_loaded": 0,
            "message": "InspiCode API is running without a catalog: no valid projects"
        })
    );
}

#[tokio::test]
async fn unavailable_catalog_with_empty_policy() {
    let unavailable = || router(Catalog::unavailable("missing file"), UnavailablePolicy::Empty);

    let (status, body) = get(unavailable(), "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = get(unavailable(), "/api/random").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loads_catalog_from_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Projets.json");
    fs::write(
        &path,
        r#"{"Projets": [
            {
                "title": "Todo CLI",
                "description": "Terminal todos",
                "category": "CLI",
                "difficulty": "easy"
            },
            {"title": "broken", "category": "CLI"}
        ]}"#,
    )
    .unwrap();

    let mut config = default_config();
    config.catalog_path = path;
    let state = AppState::new(config);
    assert_eq!(state.catalog.len(), 1);

    let (status, body) = get(app(Arc::clone(&state)), "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Todo CLI"]);

    let (_, body) = get(app(state), "/health").await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(
        body["message"],
        "InspiCode API is running! (1 catalog entries rejected)"
    );
}

#[tokio::test]
async fn pages_serve_templates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>InspiCode</h1>").unwrap();

    let mut config = default_config();
    config.templates_dir = dir.path().to_path_buf();
    let state = AppState::with_catalog(config, sample_catalog());

    let response = app(Arc::clone(&state))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>InspiCode</h1>");

    let (status, body) = get(app(state), "/favorites").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Page not found: favorites.html" }));
}

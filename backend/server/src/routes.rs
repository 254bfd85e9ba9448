use std::{io::ErrorKind, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::{
    error::AppError,
    search::{
        ProjectFilter, health, list_categories, list_difficulties, list_projects, random_project,
        stats,
    },
    state::AppState,
};

pub async fn projects_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let filter = ProjectFilter::from_pairs(pairs);
    let projects = list_projects(&state.catalog, &filter, state.config.unavailable_policy)?;

    Ok(Json(projects).into_response())
}

pub async fn random_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let filter = ProjectFilter::from_pairs(pairs);
    let project = random_project(
        &state.catalog,
        &filter,
        state.config.unavailable_policy,
        &mut rand::thread_rng(),
    )?;

    Ok(Json(project).into_response())
}

pub async fn categories_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "categories": list_categories(&state.catalog) }))
}

pub async fn difficulties_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "difficulties": list_difficulties(&state.catalog) }))
}

pub async fn stats_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(stats(&state.catalog))
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(health(&state.catalog))
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    page(&state, "index.html").await
}

pub async fn choose_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    page(&state, "choose.html").await
}

pub async fn favorites_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    page(&state, "favorites.html").await
}

async fn page(state: &AppState, name: &'static str) -> Result<Html<String>, AppError> {
    let path = state.config.templates_dir.join(name);
    debug!("Serving {}", path.display());

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(Html(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::PageNotFound(name)),
        Err(e) => Err(AppError::InternalError(e.into())),
    }
}

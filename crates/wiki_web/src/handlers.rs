use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use wiki_core::{Article, ArticleSnippet, Error, Explanation};
use crate::{ApiError, AppState};

type AppResult<T> = std::result::Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExplainParams {
    pub term: Option<String>,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<ArticleSnippet>> {
    Json(state.catalog.list_articles(params.category.as_deref()))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Article> {
    Ok(Json(state.catalog.get_article(&slug)?))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Vec<ArticleSnippet>> {
    let q = params
        .q
        .ok_or_else(|| Error::invalid_argument("Parameter q fehlt"))?;
    Ok(Json(state.catalog.search(&q)))
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.list_categories())
}

/// Five-sentence explanation of a term from the external summary source.
/// A missing `term` is treated like an empty one.
pub async fn explain(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExplainParams>,
) -> AppResult<Explanation> {
    let term = params.term.unwrap_or_default();
    let explanation = state.explainer.explain(&term).await?;
    tracing::debug!("Explained '{}' via {}", explanation.term, state.explainer.model_name());
    Ok(Json(explanation))
}

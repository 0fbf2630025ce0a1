use axum::{
    body::Body,
    extract::Path,
    http::{header, Request, StatusCode},
    routing::get as route_get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use wiki_storage::MemoryCatalog;
use wiki_summary::{models::{DummyModel, WikipediaModel}, Config, Explainer};
use wiki_web::{create_app, AppState};

fn app() -> Router {
    let model = DummyModel::new().with_extract(
        "Ozean",
        "Ein Ozean ist ein großes Gewässer. Er bedeckt weite Teile der Erde.",
    );
    let state = AppState::new(
        Arc::new(MemoryCatalog::load().unwrap()),
        Explainer::new(Arc::new(model)),
    );
    create_app(state)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), uri).await
}

async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_list_articles() {
    let (status, body) = get("/articles").await;
    assert_eq!(status, StatusCode::OK);
    let titles = titles(&body);
    assert_eq!(titles.len(), 13);
    assert_eq!(titles[0], "Algorithmus");
    assert!(body[0].get("sentences").is_none());
    assert_eq!(body[0]["slug"], "algorithmus");
}

#[tokio::test]
async fn test_list_articles_by_category() {
    let (status, body) = get("/articles?category=Physik").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Energie", "Gravitation"]);

    let (_, body) = get("/articles?category=Unbekannt").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_article() {
    let (status, body) = get("/articles/computer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Computer");
    assert_eq!(body["sentences"].as_array().unwrap().len(), 5);
    assert_eq!(body["categories"][1], "Informatik");
}

#[tokio::test]
async fn test_get_unknown_article() {
    let (status, body) = get("/articles/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Artikel nicht gefunden");
}

#[tokio::test]
async fn test_search() {
    let (status, body) = get("/search?q=demo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Demokratie"]);

    let (_, body) = get("/search?q=%20COMP%20").await;
    assert_eq!(titles(&body), vec!["Computer"]);

    let (status, body) = get("/search?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_requires_query() {
    let (status, body) = get("/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_categories() {
    let (status, body) = get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    let categories: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    let mut sorted = categories.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(categories, sorted);
    assert!(categories.contains(&"Informatik"));
}

#[tokio::test]
async fn test_explain() {
    let (status, body) = get("/ai/explain?term=%20Ozean%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["term"], "Ozean");
    let sentences = body["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 5);
    assert_eq!(sentences[0], "Ein Ozean ist ein großes Gewässer.");
    assert_eq!(sentences[4], "Er bedeckt weite Teile der Erde.");
}

#[tokio::test]
async fn test_explain_errors() {
    let (status, body) = get("/ai/explain?term=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Begriff darf nicht leer sein");

    let (status, _) = get("/ai/explain").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get("/ai/explain?term=Unbekannterbegriffxyz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Keine Zusammenfassung gefunden");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

// App whose summary source is a local stand-in for the Wikipedia endpoint.
async fn app_with_upstream() -> Router {
    async fn summary(Path(term): Path<String>) -> (StatusCode, Json<Value>) {
        match term.as_str() {
            "Kaputt" => (StatusCode::SERVICE_UNAVAILABLE, Json(serde_json::json!({}))),
            "Kaputtes JSON" => (StatusCode::OK, Json(serde_json::json!({ "extract": 5 }))),
            _ => (StatusCode::NOT_FOUND, Json(serde_json::json!({}))),
        }
    }

    let upstream = Router::new().route("/summary/:term", route_get(summary));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let config = Config {
        base_url: format!("http://{addr}/summary"),
        ..Config::default()
    };
    let model = WikipediaModel::new(&config).unwrap();
    create_app(AppState::new(
        Arc::new(MemoryCatalog::load().unwrap()),
        Explainer::new(Arc::new(model)),
    ))
}

#[tokio::test]
async fn test_explain_upstream_failures() {
    let (status, body) = send(app_with_upstream().await, "/ai/explain?term=Kaputtes%20JSON").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["detail"].is_string());

    let (status, body) = send(app_with_upstream().await, "/ai/explain?term=Kaputt").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"], "Upstream responded with status 503");

    let (status, _) = send(app_with_upstream().await, "/ai/explain?term=Unbekannterbegriffxyz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

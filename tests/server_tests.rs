//! HTTP tests for the GraphQL router, driven in-process with `oneshot`.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use bookshelf::config::{Edition, IdPolicy, ServerSettings};
use bookshelf::graphql::{AppSchema, router};
use bookshelf::model::seed_books;
use bookshelf::storage::BookRepository;

fn build_router(edition: Edition) -> (Router, Arc<BookRepository>) {
    let repo = Arc::new(BookRepository::with_books(seed_books(), IdPolicy::MaxPlusOne));
    let schema = AppSchema::build(edition, Arc::clone(&repo));
    (router(schema, &ServerSettings::default()), repo)
}

fn graphql_post(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn post_books_returns_seed() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(graphql_post("{ books { id title } }"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({ "data": { "books": [
            { "id": 1, "title": "1984" },
            { "id": 2, "title": "Brave New World" },
        ] } })
    );
}

#[tokio::test]
async fn mutations_share_one_repository() {
    let (app, repo) = build_router(Edition::Extended);

    let response = app
        .clone()
        .oneshot(graphql_post(
            r#"mutation { createBook(title: "Dune", author: "Frank Herbert", summary: "Spice.") { id } }"#,
        ))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "createBook": { "id": 3 } } })
    );

    let response = app
        .oneshot(graphql_post("{ book(id: 3) { summary } }"))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "book": { "summary": "Spice." } } })
    );
    assert_eq!(repo.len(), 3);
}

#[tokio::test]
async fn missing_book_is_null_with_no_errors() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(graphql_post("{ book(id: 99) { id } }"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "data": { "book": null } }));
}

fn graphql_get(uri: &str, accept: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::ACCEPT, accept)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn get_from_browser_serves_graphiql() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(graphql_get("/graphql", "text/html,application/xhtml+xml"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("text/html"));
}

#[tokio::test]
async fn get_with_query_string_executes_query() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(graphql_get(
            "/graphql?query=%7Bbooks%7Bid%7D%7D",
            "application/json",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "books": [{ "id": 1 }, { "id": 2 }] } })
    );
}

#[tokio::test]
async fn get_with_query_string_from_browser_still_executes() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(graphql_get(
            "/graphql?query=%7Bbook(id%3A2)%7Btitle%7D%7D",
            "text/html",
        ))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "book": { "title": "Brave New World" } } })
    );
}

#[tokio::test]
async fn graphiql_can_be_disabled() {
    let repo = Arc::new(BookRepository::default());
    let settings = ServerSettings {
        graphiql: false,
        ..Default::default()
    };
    let app = router(AppSchema::build(Edition::Extended, repo), &settings);

    let response = app
        .oneshot(graphql_get("/graphql", "text/html"))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|ct| ct.to_str().unwrap_or("").contains("text/html"));
    assert!(!is_html);
}

#[tokio::test]
async fn plain_options_is_not_a_preflight() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/graphql")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .is_none()
    );
}

#[tokio::test]
async fn preflight_from_allowed_origin() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/graphql")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");
}

#[tokio::test]
async fn disallowed_origin_gets_no_cors_headers() {
    let (app, _) = build_router(Edition::Extended);

    let mut request = graphql_post("{ books { id } }");
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://evil.example".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn allowed_origin_on_post() {
    let (app, _) = build_router(Edition::Extended);

    let mut request = graphql_post("{ books { id } }");
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:3000".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn minimal_edition_over_http() {
    let (app, repo) = build_router(Edition::Minimal);

    let response = app
        .clone()
        .oneshot(graphql_post("{ book(id: 1) { title author } }"))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "book": { "title": "1984", "author": "George Orwell" } } })
    );

    let response = app
        .oneshot(graphql_post("mutation { deleteBook(id: 1) { id } }"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (app, _) = build_router(Edition::Extended);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/other")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! HTTP-surface integration tests over the in-memory repository.
//!
//! Exercises the three routes end to end: listing, creating via the form,
//! and marking tasks done, including the not-found and missing-field failure
//! paths.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskBoardService;
use taskboard::web;
use tower::ServiceExt;

fn app() -> Router {
    web::router(TaskBoardService::new(Arc::new(InMemoryTaskRepository::new())))
}

async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("request should be handled")
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("request should be handled")
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn assert_redirects_home(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok());
    assert_eq!(location, Some("/"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_store_renders_an_empty_list() {
    let app = app();
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("Tasks"));
    assert!(!page.contains("<li>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn add_form_page_renders() {
    let app = app();
    let response = get(&app, "/add/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("<form method=\"post\" action=\"/add/\">"));
    assert!(page.contains("name=\"title\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_pending_in_the_list() {
    let app = app();

    let response = post_form(&app, "/add/", "title=Buy+milk").await;
    assert_redirects_home(&response);

    let page = body_text(get(&app, "/").await).await;
    assert!(page.contains("Buy milk"));
    assert!(!page.contains("(done)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_title_field_is_rejected_and_stores_nothing() {
    let app = app();

    let response = post_form(&app, "/add/", "label=nope").await;
    assert!(response.status().is_client_error());

    let page = body_text(get(&app, "/").await).await;
    assert!(!page.contains("<li>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_title_is_rejected() {
    let app = app();

    let response = post_form(&app, "/add/", "title=++").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let page = body_text(get(&app, "/").await).await;
    assert!(!page.contains("<li>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn titles_are_html_escaped_in_the_list() {
    let app = app();

    post_form(&app, "/add/", "title=%3Cb%3Ebold%3C%2Fb%3E").await;

    let page = body_text(get(&app, "/").await).await;
    assert!(page.contains("&lt;b&gt;bold&lt;&#x2f;b&gt;") || page.contains("&lt;b&gt;"));
    assert!(!page.contains("<b>bold</b>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn mark_done_completes_only_the_addressed_task() {
    let app = app();

    post_form(&app, "/add/", "title=A").await;
    post_form(&app, "/add/", "title=B").await;

    // The in-memory store assigns ids 1 and 2 in insertion order.
    let response = post_form(&app, "/done/1/", "").await;
    assert_redirects_home(&response);

    let page = body_text(get(&app, "/").await).await;
    assert!(page.contains("<s>A</s>"));
    assert!(!page.contains("<s>B</s>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn mark_done_twice_leaves_the_task_done() {
    let app = app();

    post_form(&app, "/add/", "title=Twice").await;
    for _ in 0..2 {
        let response = get(&app, "/done/1/").await;
        assert_redirects_home(&response);
    }

    let page = body_text(get(&app, "/").await).await;
    assert!(page.contains("<s>Twice</s>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn mark_done_on_unknown_id_is_not_found_and_changes_nothing() {
    let app = app();

    post_form(&app, "/add/", "title=Keep+me").await;
    let response = post_form(&app, "/done/99/", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let page = body_text(get(&app, "/").await).await;
    assert!(!page.contains("(done)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn mark_done_with_non_integer_id_is_not_found() {
    let app = app();
    let response = get(&app, "/done/abc/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_paths_are_not_found() {
    let app = app();
    let response = get(&app, "/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! End-to-end hydration against a local HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use url::Url;

use showcase::hydrate::{ContainerOutcome, Hydrator};
use showcase::http_client::HttpClient;
use showcase::loader::{ListOptions, LoadError, ProjectLoader, DEFAULT_DATA_PATH};
use showcase::page::Page;
use showcase::render::{RenderOptions, EMPTY_MESSAGE, ERROR_MESSAGE};

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Projects</title></head>
<body>
  <nav data-nav>
    <a href="index.html" class="text-gray-600">Home</a>
    <a href="projects.html" class="text-gray-600">Projects</a>
  </nav>
  <main>
    <div data-projects data-projects-featured data-projects-limit="1"><p>Loading...</p></div>
    <div data-projects><p>Loading...</p></div>
  </main>
</body>
</html>"#;

const PROJECTS: &str = r#"[
  {"title": "Local", "url": "/local.html", "featured": false},
  {"title": "Remote", "url": "https://other-site.example/x", "image": "img/remote.png", "featured": true},
  {"title": "<b>Bold</b>", "description": "Tom & Jerry", "date": "May 2024"}
]"#;

fn json(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn serve(projects: Router) -> SocketAddr {
    let app = Router::new()
        .route("/projects.html", get(|| async { ([(header::CONTENT_TYPE, "text/html")], PAGE) }))
        .merge(projects);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client() -> HttpClient {
    HttpClient::new(Duration::from_secs(5), None).unwrap()
}

fn hydrator() -> Hydrator {
    Hydrator::new(
        ProjectLoader::new(client(), DEFAULT_DATA_PATH),
        RenderOptions::default(),
    )
}

async fn hydrated(addr: SocketAddr) -> (Page, Vec<ContainerOutcome>) {
    let mut page = Page::open(&format!("http://{}/projects.html", addr), &client())
        .await
        .unwrap();
    let report = hydrator().hydrate(&mut page).await;
    assert_eq!(report.active_links, 1);
    (page, report.containers)
}

#[tokio::test]
async fn test_hydrates_served_page() {
    let addr = serve(Router::new().route("/data/projects.json", get(|| async { json(PROJECTS) }))).await;

    let (mut page, outcomes) = hydrated(addr).await;
    assert_eq!(
        outcomes,
        vec![ContainerOutcome::Rendered(1), ContainerOutcome::Rendered(3)]
    );

    let containers = page.containers_mut();
    let featured = containers[0].child_elements().collect::<Vec<_>>();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].attr("href"), Some("https://other-site.example/x"));
    assert_eq!(featured[0].attr("target"), Some("_blank"));
    assert_eq!(featured[0].attr("rel"), Some("noopener noreferrer"));

    let all = containers[1].child_elements().collect::<Vec<_>>();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name(), "a");
    assert_eq!(all[0].attr("target"), None);
    assert_eq!(all[2].name(), "div");

    let html = page.to_html();
    assert!(html.contains(r#"aria-current="page">Projects</a>"#));
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    assert!(html.contains("Tom &amp; Jerry"));
    assert!(html.contains(r#"alt="Remote cover""#));
    assert!(!html.contains("Loading..."));
}

#[tokio::test]
async fn test_error_status_renders_error_placeholder() {
    let addr = serve(Router::new().route(
        "/data/projects.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let (mut page, outcomes) = hydrated(addr).await;
    assert_eq!(outcomes, vec![ContainerOutcome::Failed, ContainerOutcome::Failed]);

    for container in page.containers_mut() {
        assert_eq!(container.children().len(), 1);
        assert_eq!(container.text_content(), ERROR_MESSAGE);
    }
    let html = page.to_html();
    assert!(!html.contains("boom"));
    assert!(!html.contains("500"));
}

#[tokio::test]
async fn test_non_array_payload_renders_empty_state() {
    let addr = serve(Router::new().route(
        "/data/projects.json",
        get(|| async { json(r#"{"projects": [{"title": "hidden"}]}"#) }),
    ))
    .await;

    let (mut page, outcomes) = hydrated(addr).await;
    assert_eq!(outcomes, vec![ContainerOutcome::Empty, ContainerOutcome::Empty]);

    for container in page.containers_mut() {
        assert_eq!(container.children().len(), 1);
        assert_eq!(container.text_content(), EMPTY_MESSAGE);
    }
}

#[tokio::test]
async fn test_missing_document_is_fetch_error_with_status() {
    let addr = serve(Router::new()).await;
    let loader = ProjectLoader::new(client(), DEFAULT_DATA_PATH);
    let location = Url::parse(&format!("http://{}/data/projects.json", addr)).unwrap();

    let err = loader
        .load(&location, ListOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Fetch { status: 404 }));
}

#[tokio::test]
async fn test_page_error_status() {
    let addr = serve(Router::new()).await;
    let result = Page::open(&format!("http://{}/missing.html", addr), &client()).await;
    assert!(result.is_err());
}

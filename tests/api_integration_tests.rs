use quire::api::{ApiError, BlogApi, FaultKind, HttpBlogApi, NewPost};
use quire::core::action::{Action, Effect, update};
use quire::core::location::{Location, Route};
use quire::core::state::{App, SiteInfo};
use quire::tui::tasks;
use serde_json::json;
use std::sync::{Arc, mpsc};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn page_body(current_page: u32, total_pages: u32, ids: &[u64]) -> serde_json::Value {
    let posts: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Post {id}"),
                "content": format!("Body of post {id}."),
            })
        })
        .collect();
    json!({
        "posts": posts,
        "pagination": {
            "current_page": current_page,
            "total_pages": total_pages,
            "has_prev": current_page > 1,
            "has_next": current_page < total_pages,
        }
    })
}

async fn mount_page(server: &MockServer, page: u32, total: u32, ids: &[u64], delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(page, total, ids))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

fn http_api(server: &MockServer) -> Arc<dyn BlogApi> {
    Arc::new(HttpBlogApi::new(&server.uri(), Duration::from_secs(5)).unwrap())
}

fn app_at(api: Arc<dyn BlogApi>, location: &str) -> App {
    let site = SiteInfo {
        title: "Blog".to_string(),
        author: Some("Test Author".to_string()),
    };
    App::new(api, site, Location::parse(location).unwrap())
}

/// Runs every request effect to completion and feeds the responses back in.
async fn settle(app: &mut App, effects: Vec<Effect>) {
    let mut pending = effects;
    while let Some(effect) = pending.pop() {
        if let Some(action) = tasks::execute(app.api.clone(), effect).await {
            pending.extend(update(app, action));
        }
    }
}

// ============================================================================
// HttpBlogApi
// ============================================================================

#[tokio::test]
async fn test_list_posts_sends_page_query() {
    let server = MockServer::start().await;
    mount_page(&server, 2, 3, &[6, 7], Duration::ZERO).await;

    let page = http_api(&server).list_posts(2).await.unwrap();
    assert_eq!(page.pagination.current_page, 2);
    assert!(page.pagination.has_prev && page.pagination.has_next);
    assert_eq!(
        page.posts.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![6, 7]
    );
}

#[tokio::test]
async fn test_list_posts_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = http_api(&server).list_posts(1).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            message: "boom".to_string()
        }
    );
    assert_eq!(err.kind(), FaultKind::NetworkError);
}

#[tokio::test]
async fn test_list_posts_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = http_api(&server).list_posts(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_get_post_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "title": "Hello",
            "content": "World",
        })))
        .mount(&server)
        .await;

    let post = http_api(&server).get_post(4).await.unwrap();
    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, "World");
}

#[tokio::test]
async fn test_get_post_missing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = http_api(&server).get_post(999).await.unwrap_err();
    assert_eq!(err, ApiError::NotFound { id: 999 });
    assert_eq!(err.kind(), FaultKind::NotFound);
}

#[tokio::test]
async fn test_create_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .and(body_json(json!({ "title": "Hello", "content": "World" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let result = http_api(&server)
        .create_post(&NewPost::new("Hello", "World"))
        .await;
    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_create_post_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(422).set_body_string("title taken"))
        .mount(&server)
        .await;

    let err = http_api(&server)
        .create_post(&NewPost::new("Hello", "World"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 422, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let api = HttpBlogApi::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = api.list_posts(1).await.unwrap_err();
    assert_eq!(err.kind(), FaultKind::NetworkError);
}

// ============================================================================
// Core + HTTP
// ============================================================================

#[tokio::test]
async fn test_start_location_loads_requested_page() {
    let server = MockServer::start().await;
    mount_page(&server, 2, 2, &[3], Duration::ZERO).await;

    let mut app = app_at(http_api(&server), "/?page=2");
    let effects = update(&mut app, Action::Init);
    settle(&mut app, effects).await;

    assert_eq!(app.list.current_page(), 2);
    assert_eq!(app.list.posts().len(), 1);
    assert_eq!(app.list.next_page(), None);
    assert_eq!(app.list.prev_page(), Some(1));
}

#[tokio::test]
async fn test_slow_response_for_abandoned_page_is_dropped() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 3, &[1, 2], Duration::ZERO).await;
    mount_page(&server, 2, 3, &[3, 4], Duration::from_millis(500)).await;
    mount_page(&server, 3, 3, &[5], Duration::ZERO).await;

    let mut app = app_at(http_api(&server), "/");
    let effects = update(&mut app, Action::Init);
    settle(&mut app, effects).await;
    assert_eq!(app.list.current_page(), 1);

    let (tx, rx) = mpsc::channel();
    for page in [2, 3] {
        for effect in update(&mut app, Action::SetPage(page)) {
            tasks::spawn_effect(app.api.clone(), effect, tx.clone());
        }
    }
    drop(tx);

    // Apply responses in the order they arrive: page 3 first, then page 2
    let received = tokio::task::spawn_blocking(move || rx.iter().collect::<Vec<_>>())
        .await
        .unwrap();
    assert_eq!(received.len(), 2);
    for action in received {
        update(&mut app, action);
    }

    assert_eq!(app.location().to_string(), "/?page=3");
    assert_eq!(app.list.current_page(), 3);
    assert_eq!(app.list.posts()[0].id, 5);
}

#[tokio::test]
async fn test_missing_post_shows_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut app = app_at(http_api(&server), "/post/999");
    let effects = update(&mut app, Action::Init);
    settle(&mut app, effects).await;

    assert_eq!(app.route, Route::Post { id: 999 });
    assert!(app.detail.is_not_found());
}

#[tokio::test]
async fn test_publishing_returns_to_first_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, 1, &[1], Duration::ZERO).await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_at(http_api(&server), "/create");
    let effects = update(&mut app, Action::Init);
    settle(&mut app, effects).await;

    let effects = update(&mut app, Action::SubmitPost(NewPost::new("Hello", "World")));
    settle(&mut app, effects).await;

    assert_eq!(app.location().to_string(), "/");
    assert_eq!(app.route, Route::List);
    assert_eq!(app.list.current_page(), 1);
}

#[tokio::test]
async fn test_rejected_post_stays_on_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = app_at(http_api(&server), "/create");
    let effects = update(&mut app, Action::SubmitPost(NewPost::new("Hello", "World")));
    settle(&mut app, effects).await;

    assert_eq!(app.route, Route::Create);
    assert!(!app.create.is_submitting());
    assert!(app.status_message.contains("not published"));
}

//! Fetch boundary tests against a mock catalog server.

mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use cuppa::catalog::{CatalogClient, CatalogState, FetchError};
use cuppa::strings;
use cuppa::ui::app::App;

#[tokio::test]
async fn fetch_decodes_records_in_response_order() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::catalog(
        r#"[
            {"id": 3, "title": "Cortado", "ingredients": ["Espresso", "Steamed Milk"]},
            {"id": 1, "title": "Latte", "description": "Smooth", "image": "http://x/1.jpg"},
            {"id": 2, "title": "Americano", "description": ""}
        ]"#,
    ))
    .await;

    let client = CatalogClient::new(mock.endpoint());
    let coffees = client.fetch().await.unwrap();

    let ids: Vec<i64> = coffees.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(coffees[0].title, "Cortado");
    assert_eq!(coffees[0].ingredients().map(<[String]>::len), Some(2));
    assert_eq!(coffees[1].description(), Some("Smooth"));
    assert_eq!(coffees[1].image(), Some("http://x/1.jpg"));
    // Empty string behaves like an absent field.
    assert_eq!(coffees[2].description(), None);
}

#[tokio::test]
async fn empty_catalog_reaches_empty_not_ready() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::catalog("[]")).await;

    let client = CatalogClient::new(mock.endpoint());
    let mut app = App::new();
    app.on_fetch_done(client.fetch().await);

    assert_eq!(app.catalog(), &CatalogState::Empty);
}

#[tokio::test]
async fn non_2xx_status_collapses_to_the_fixed_message() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::error(500)).await;

    let client = CatalogClient::new(mock.endpoint());
    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert_eq!(err.user_message(), strings::FETCH_FAILED);
}

#[tokio::test]
async fn malformed_body_collapses_to_the_fixed_message() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::not_json()).await;

    let client = CatalogClient::new(mock.endpoint());
    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.user_message(), strings::FETCH_FAILED);
}

#[tokio::test]
async fn unreachable_endpoint_collapses_to_the_fixed_message() {
    // Bind-then-drop leaves a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogClient::new(format!("http://{}/coffee/hot", addr));
    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert_eq!(err.user_message(), strings::FETCH_FAILED);
}

#[tokio::test]
async fn any_failure_lands_the_loader_on_the_error_screen() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::error(404)).await;
    mock.enqueue(MockResponse::not_json()).await;

    let client = CatalogClient::new(mock.endpoint());
    for _ in 0..2 {
        let mut app = App::new();
        app.on_fetch_done(client.fetch().await);
        assert_eq!(
            app.catalog(),
            &CatalogState::Error {
                message: strings::FETCH_FAILED,
            }
        );
    }
}

#[tokio::test]
async fn fetch_is_a_bare_get() {
    let mock = MockCatalog::start().await;
    mock.enqueue(MockResponse::catalog("[]")).await;

    let client = CatalogClient::new(mock.endpoint());
    client.fetch().await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/coffee/hot");
    assert_eq!(requests[0].query, None);
    assert!(!requests[0].has_header("authorization"));
}

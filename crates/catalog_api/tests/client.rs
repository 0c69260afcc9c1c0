use std::time::Duration;

use catalog_api::{ApiFailure, ApiSettings, Book, BookApi, BookDraft, BookId, ReqwestBookApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    }
}

#[tokio::test]
async fn list_returns_books_and_normalizes_id_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Dune", "author": "Frank Herbert", "publisher": "Chilton"},
            {"id": "two", "title": "Hyperion", "author": "Dan Simmons", "publisher": "Doubleday"},
        ])))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let books = api.list_books().await.expect("list ok");

    assert_eq!(
        books,
        vec![
            Book {
                id: BookId::new("1"),
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                publisher: "Chilton".to_string(),
            },
            Book {
                id: BookId::new("two"),
                title: "Hyperion".to_string(),
                author: "Dan Simmons".to_string(),
                publisher: "Doubleday".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn list_tolerates_missing_text_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 3}])))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let books = api.list_books().await.expect("list ok");

    assert_eq!(books[0].id, BookId::new("3"));
    assert_eq!(books[0].title, "");
    assert_eq!(books[0].author, "");
}

#[tokio::test]
async fn list_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let err = api.list_books().await.unwrap_err();

    assert_eq!(err.kind, ApiFailure::HttpStatus(500));
    assert!(err.message.contains("500"));
}

#[tokio::test]
async fn list_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = ReqwestBookApi::new(settings);
    let err = api.list_books().await.unwrap_err();

    assert_eq!(err.kind, ApiFailure::Timeout);
}

#[tokio::test]
async fn list_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let err = api.list_books().await.unwrap_err();

    assert_eq!(err.kind, ApiFailure::InvalidBody);
}

#[tokio::test]
async fn create_posts_the_draft_and_returns_the_assigned_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .and(body_json(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "publisher": "Chilton",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "title": "Dune",
            "author": "Frank Herbert",
            "publisher": "Chilton",
        })))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let draft = BookDraft {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        publisher: "Chilton".to_string(),
    };
    let created = api.create_book(&draft).await.expect("create ok");

    assert_eq!(created.id, BookId::new("42"));
    assert_eq!(created.title, "Dune");
}

#[tokio::test]
async fn create_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let draft = BookDraft {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        publisher: "Chilton".to_string(),
    };
    let err = api.create_book(&draft).await.unwrap_err();

    assert_eq!(err.kind, ApiFailure::HttpStatus(500));
    assert!(err.message.contains("500"));
}

#[tokio::test]
async fn delete_targets_the_book_resource() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/books/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    api.delete_book(&BookId::new("42")).await.expect("delete ok");
}

#[tokio::test]
async fn delete_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/books/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = ReqwestBookApi::new(settings_for(&server));
    let err = api.delete_book(&BookId::new("42")).await.unwrap_err();

    assert_eq!(err.kind, ApiFailure::HttpStatus(404));
}

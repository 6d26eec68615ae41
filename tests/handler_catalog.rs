mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_root_redirects_to_catalog() {
    let (server, _memory) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/catalog");
}

#[tokio::test]
async fn test_home_page_counts_match_store() {
    let (server, memory) = common::create_test_server();

    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    common::create_test_author(&memory, "Alan", "Turing").await;
    let rust = common::create_test_language(&memory, "Rust").await;
    common::create_test_language(&memory, "Go").await;
    common::create_test_language(&memory, "Zig").await;
    common::create_test_note(&memory, "Ownership", ada.id, vec![rust.id], vec![]).await;

    let response = server.get("/catalog").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(r#"<span id="note-count">1</span>"#));
    assert!(body.contains(r#"<span id="author-count">2</span>"#));
    assert!(body.contains(r#"<span id="language-count">3</span>"#));
    assert!(body.contains(r#"<span id="component-count">0</span>"#));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let (server, _memory) = common::create_test_server();

    let response = server.get("/catalog/nothing/here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.text();
    assert!(body.contains("<title>Error</title>"));
    assert!(body.contains("Page not found."));
}

#[tokio::test]
async fn test_detail_for_unassigned_id_is_not_found() {
    let (server, _memory) = common::create_test_server();

    for path in [
        "/catalog/note/999",
        "/catalog/author/999",
        "/catalog/language/999",
        "/catalog/component/999",
    ] {
        server.get(path).await.assert_status(StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_detail_for_malformed_id_is_not_found() {
    let (server, _memory) = common::create_test_server();

    let response = server.get("/catalog/author/not-an-id").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Author not found."));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _memory) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["backend"], "memory");
    assert!(json["checks"]["store"].get("message").is_none());
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_unreadable_form_renders_error_page() {
    let (server, _memory) = common::create_test_server();

    let response = server
        .post("/catalog/note/create")
        .text("title=Ownership")
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response.text();
    assert!(body.contains("<title>Error</title>"));
    assert!(body.contains("The submitted form could not be read."));
}

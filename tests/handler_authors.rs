mod common;

use axum::http::StatusCode;
use coding_notes::domain::repositories::AuthorRepository;

#[tokio::test]
async fn test_author_list_sorted_by_family_name() {
    let (server, memory) = common::create_test_server();
    common::create_test_author(&memory, "Alan", "Turing").await;
    common::create_test_author(&memory, "Ada", "Lovelace").await;

    let response = server.get("/catalog/authors").await;

    response.assert_status_ok();
    let body = response.text();
    let lovelace = body.find("Lovelace, Ada").unwrap();
    let turing = body.find("Turing, Alan").unwrap();
    assert!(lovelace < turing);
}

#[tokio::test]
async fn test_create_author_redirects_to_detail() {
    let (server, memory) = common::create_test_server();

    let response = server
        .post("/catalog/author/create")
        .form(&[
            ("first_name", " Grace "),
            ("family_name", "Hopper"),
            ("date_joined", "1906-12-09"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let authors = memory.authors.list().await.unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].first_name, "Grace");
    assert_eq!(common::location(&response), authors[0].url());
}

#[tokio::test]
async fn test_create_author_invalid_rerenders_form() {
    let (server, memory) = common::create_test_server();

    let response = server
        .post("/catalog/author/create")
        .form(&[("first_name", "Jean-Luc"), ("family_name", "Picard")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("First Name can only include alpha-numeric characters."));
    assert!(body.contains(r#"value="Jean-Luc""#));
    assert_eq!(memory.authors.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_author_detail_lists_notes() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    common::create_test_note(&memory, "Engines", ada.id, vec![], vec![]).await;

    let response = server.get(&ada.url()).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Lovelace, Ada"));
    assert!(body.contains("Engines"));
}

#[tokio::test]
async fn test_delete_author_without_notes() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;

    let response = server.post(&format!("{}/delete", ada.url())).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/catalog/authors");
    assert!(memory.authors.find_by_id(ada.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_author_with_notes_is_blocked() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    common::create_test_note(&memory, "Engines", ada.id, vec![], vec![]).await;

    let response = server.post(&format!("{}/delete", ada.url())).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Delete the following notes"));
    assert!(body.contains("Engines"));
    assert!(memory.authors.find_by_id(ada.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_form_for_missing_author_redirects_to_list() {
    let (server, _memory) = common::create_test_server();

    let response = server.get("/catalog/author/42/delete").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/catalog/authors");
}

#[tokio::test]
async fn test_update_form_is_populated() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;

    let response = server.get(&format!("{}/update", ada.url())).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<title>Update Author</title>"));
    assert!(body.contains(r#"value="Lovelace""#));
}

#[tokio::test]
async fn test_update_missing_author_is_not_found() {
    let (server, _memory) = common::create_test_server();

    let response = server
        .post("/catalog/author/7/update")
        .form(&[("first_name", "Ada"), ("family_name", "Lovelace")])
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_update_of_missing_author_is_not_found() {
    let (server, _memory) = common::create_test_server();

    let response = server
        .post("/catalog/author/999/update")
        .form(&[("first_name", ""), ("family_name", "Lovelace")])
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Author not found."));
}

#[tokio::test]
async fn test_overlong_author_name_reports_length() {
    let (server, memory) = common::create_test_server();
    let long = "a".repeat(101);

    let response = server
        .post("/catalog/author/create")
        .form(&[("first_name", long.as_str()), ("family_name", "Lovelace")])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("First Name must be at most 100 characters."));
    assert!(!body.contains("First Name must be specified."));
    assert_eq!(memory.authors.count().await.unwrap(), 0);
}

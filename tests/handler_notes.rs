mod common;

use axum::http::StatusCode;
use coding_notes::domain::repositories::NoteRepository;

#[tokio::test]
async fn test_note_list_shows_author() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    common::create_test_note(&memory, "Traits", ada.id, vec![], vec![]).await;
    common::create_test_note(&memory, "Closures", ada.id, vec![], vec![]).await;

    let response = server.get("/catalog/notes").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("(Lovelace, Ada)"));
    assert!(body.find("Closures").unwrap() < body.find("Traits").unwrap());
}

#[tokio::test]
async fn test_note_detail_resolves_references() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let rust = common::create_test_language(&memory, "Rust").await;
    let traits = common::create_test_component(&memory, "Traits").await;
    let note =
        common::create_test_note(&memory, "Generics", ada.id, vec![rust.id], vec![traits.id])
            .await;

    let response = server.get(&note.url()).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(&format!(r#"<a href="{}">Lovelace, Ada</a>"#, ada.url())));
    assert!(body.contains(&format!(r#"<a href="{}">Rust</a>"#, rust.url())));
    assert!(body.contains(&format!(r#"<a href="{}">Traits</a>"#, traits.url())));
}

#[tokio::test]
async fn test_create_note_with_repeated_multi_select() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let rust = common::create_test_language(&memory, "Rust").await;
    let c = common::create_test_language(&memory, "C").await;
    let author = ada.id.to_string();
    let rust_id = rust.id.to_string();
    let c_id = c.id.to_string();

    let response = server
        .post("/catalog/note/create")
        .form(&[
            ("title", "FFI"),
            ("author", author.as_str()),
            ("summary", "Calling C"),
            ("text", "Use extern blocks to call C."),
            ("language", rust_id.as_str()),
            ("language", c_id.as_str()),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let notes = memory.notes.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].languages, vec![rust.id, c.id]);
    assert!(notes[0].components.is_empty());
    assert_eq!(common::location(&response), notes[0].url());
}

#[tokio::test]
async fn test_short_title_rerenders_form_and_keeps_choices() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let rust = common::create_test_language(&memory, "Rust").await;
    common::create_test_language(&memory, "Go").await;
    let author = ada.id.to_string();
    let rust_id = rust.id.to_string();

    let response = server
        .post("/catalog/note/create")
        .form(&[
            ("title", "ab"),
            ("author", author.as_str()),
            ("summary", "Ownership rules"),
            ("text", "Each value has one owner."),
            ("language", rust_id.as_str()),
        ])
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Title must contain at least three (3) characters."));
    assert!(body.contains(&format!(r#"value="{}" checked"#, rust.id)));
    assert!(body.contains(&format!(r#"<option value="{}" selected>"#, ada.id)));
    assert_eq!(memory.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_note_preserves_id() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let traits = common::create_test_component(&memory, "Traits").await;
    let note = common::create_test_note(&memory, "Generics", ada.id, vec![], vec![]).await;
    let author = ada.id.to_string();
    let component = traits.id.to_string();

    let response = server
        .post(&format!("{}/update", note.url()))
        .form(&[
            ("title", "Generic types"),
            ("author", author.as_str()),
            ("summary", "Type parameters"),
            ("text", "Functions can be generic over types."),
            ("component", component.as_str()),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), note.url());

    let updated = memory.notes.find_by_id(note.id).await.unwrap().unwrap();
    assert_eq!(updated.id, note.id);
    assert_eq!(updated.title, "Generic types");
    assert_eq!(updated.components, vec![traits.id]);
    assert_eq!(memory.notes.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_form_marks_stored_references() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let turing = common::create_test_author(&memory, "Alan", "Turing").await;
    let traits = common::create_test_component(&memory, "Traits").await;
    let note = common::create_test_note(&memory, "Generics", turing.id, vec![], vec![traits.id])
        .await;

    let response = server.get(&format!("{}/update", note.url())).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains(&format!(r#"<option value="{}" selected>"#, turing.id)));
    assert!(!body.contains(&format!(r#"<option value="{}" selected>"#, ada.id)));
    assert!(body.contains(&format!(r#"value="{}" checked"#, traits.id)));
}

#[tokio::test]
async fn test_delete_note() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let note = common::create_test_note(&memory, "Generics", ada.id, vec![], vec![]).await;

    let response = server.post(&format!("{}/delete", note.url())).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/catalog/notes");
    assert_eq!(memory.notes.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_update_of_missing_note_is_not_found() {
    let (server, _memory) = common::create_test_server();

    let response = server
        .post("/catalog/note/999/update")
        .form(&[("title", "ab")])
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Note not found."));
}

#[tokio::test]
async fn test_invalid_update_of_existing_note_rerenders_form() {
    let (server, memory) = common::create_test_server();
    let ada = common::create_test_author(&memory, "Ada", "Lovelace").await;
    let note = common::create_test_note(&memory, "Generics", ada.id, vec![], vec![]).await;

    let response = server
        .post(&format!("{}/update", note.url()))
        .form(&[("title", "ab")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("<title>Update Note</title>"));
    let stored = memory.notes.find_by_id(note.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Generics");
}

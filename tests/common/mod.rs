#![allow(dead_code)]

use axum_test::TestServer;
use coding_notes::domain::entities::{
    Author, Component, Language, NewAuthor, NewComponent, NewLanguage, NewNote, Note, RecordId,
};
use coding_notes::domain::repositories::{
    AuthorRepository, ComponentRepository, LanguageRepository, NoteRepository,
};
use coding_notes::infrastructure::Store;
use coding_notes::infrastructure::memory::MemoryStore;
use coding_notes::routes::build_router;
use coding_notes::state::AppState;

/// A test server over a fresh in-memory store, plus the store for seeding
/// and inspection.
pub fn create_test_server() -> (TestServer, MemoryStore) {
    let memory = MemoryStore::new();
    let state = AppState::new(Store::from_memory(memory.clone()), true);
    let server = TestServer::new(build_router(state, "static")).unwrap();

    (server, memory)
}

pub async fn create_test_author(memory: &MemoryStore, first: &str, family: &str) -> Author {
    memory
        .authors
        .create(NewAuthor {
            first_name: first.to_string(),
            family_name: family.to_string(),
            date_joined: None,
        })
        .await
        .unwrap()
}

pub async fn create_test_language(memory: &MemoryStore, name: &str) -> Language {
    memory
        .languages
        .create(NewLanguage {
            name: name.to_string(),
            description: format!("{name} programming language"),
        })
        .await
        .unwrap()
}

pub async fn create_test_component(memory: &MemoryStore, name: &str) -> Component {
    memory
        .components
        .create(NewComponent {
            name: name.to_string(),
            description: format!("{name} building block"),
        })
        .await
        .unwrap()
}

pub async fn create_test_note(
    memory: &MemoryStore,
    title: &str,
    author: RecordId,
    languages: Vec<RecordId>,
    components: Vec<RecordId>,
) -> Note {
    memory
        .notes
        .create(NewNote {
            title: title.to_string(),
            author,
            summary: format!("Summary of {title}"),
            text: format!("Longer text about {title}."),
            languages,
            components,
            date_created: None,
        })
        .await
        .unwrap()
}

pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .header("location")
        .to_str()
        .unwrap()
        .to_string()
}

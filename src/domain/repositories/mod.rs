//! Repository trait definitions for the domain layer.
//!
//! One repository per catalog resource. Implementations live in
//! `crate::infrastructure` (PostgreSQL and in-memory); mock implementations
//! are generated via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`AuthorRepository`] - Author records
//! - [`LanguageRepository`] - Language records
//! - [`ComponentRepository`] - Component records
//! - [`NoteRepository`] - Notes and reverse reference lookups

pub mod author_repository;
pub mod component_repository;
pub mod language_repository;
pub mod note_repository;

pub use author_repository::AuthorRepository;
pub use component_repository::ComponentRepository;
pub use language_repository::LanguageRepository;
pub use note_repository::NoteRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use component_repository::MockComponentRepository;
#[cfg(test)]
pub use language_repository::MockLanguageRepository;
#[cfg(test)]
pub use note_repository::MockNoteRepository;

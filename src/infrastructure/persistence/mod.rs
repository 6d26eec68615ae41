//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Rows are decoded into private `FromRow` structs and converted into domain
//! entities, keeping the domain layer free of SQL types.
//!
//! # Repositories
//!
//! - [`PgAuthorRepository`] - `authors` table
//! - [`PgLanguageRepository`] - `languages` table
//! - [`PgComponentRepository`] - `components` table
//! - [`PgNoteRepository`] - `notes` table; language and component references
//!   are `BIGINT[]` columns, searched with `= ANY(...)`

pub mod pg_author_repository;
pub mod pg_component_repository;
pub mod pg_language_repository;
pub mod pg_note_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_component_repository::PgComponentRepository;
pub use pg_language_repository::PgLanguageRepository;
pub use pg_note_repository::PgNoteRepository;

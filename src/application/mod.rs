//! Application layer services implementing catalog business rules.
//!
//! Services coordinate repository calls: explicit joins between notes and the
//! records they reference, duplicate-name detection, and dependent-record
//! checks before deletion. HTTP handlers talk to services only.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Authors and their notes
//! - [`services::language_service::LanguageService`] - Languages and their notes
//! - [`services::component_service::ComponentService`] - Components and their notes
//! - [`services::note_service::NoteService`] - Notes with resolved references
//! - [`services::catalog_service::CatalogService`] - Cross-resource counts and integrity checks

pub mod services;

//! Server-rendered catalog pages.
//!
//! Uses Askama templates from `templates/`. Every page template receives a
//! `title` plus the records it shows.
//!
//! # Modules
//!
//! - [`extract`] - Form extractor rendering rejections as error pages
//! - [`forms`] - Form payloads and validation
//! - [`handlers`] - Page handlers per resource
//! - [`middleware`] - HTML error page rendering and request tracing
//! - [`routes`] - Catalog route configuration

pub mod extract;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;

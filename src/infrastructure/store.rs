//! Explicitly managed persistence handle.
//!
//! A [`Store`] is constructed once at startup, handed to
//! [`crate::state::AppState`], and closed after the server stops. There is no
//! global connection state.

use crate::config::Config;
use crate::domain::repositories::{
    AuthorRepository, ComponentRepository, LanguageRepository, NoteRepository,
};
use crate::error::AppError;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::{
    PgAuthorRepository, PgComponentRepository, PgLanguageRepository, PgNoteRepository,
};

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// The repository set every service is built from.
#[derive(Clone)]
pub struct Repositories {
    pub authors: Arc<dyn AuthorRepository>,
    pub languages: Arc<dyn LanguageRepository>,
    pub components: Arc<dyn ComponentRepository>,
    pub notes: Arc<dyn NoteRepository>,
}

#[derive(Clone)]
enum Backend {
    Postgres(Arc<PgPool>),
    Memory,
}

/// Persistence handle: a backend plus the repositories bound to it.
#[derive(Clone)]
pub struct Store {
    backend: Backend,
    repositories: Repositories,
}

impl Store {
    /// Opens the store described by `config`.
    ///
    /// Connects to PostgreSQL and applies migrations when a database URL is
    /// configured; otherwise falls back to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection or a migration fails.
    pub async fn connect(config: &Config) -> Result<Self> {
        match &config.database_url {
            Some(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                    .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                    .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                    .connect(url)
                    .await
                    .context("Failed to connect to database")?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("Migrations applied");

                Ok(Self::from_pool(pool))
            }
            None => {
                tracing::warn!("No database configured. Using in-memory store; data is lost on exit.");
                Ok(Self::from_memory(MemoryStore::new()))
            }
        }
    }

    /// Wraps an existing, already migrated pool.
    pub fn from_pool(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        let repositories = Repositories {
            authors: Arc::new(PgAuthorRepository::new(pool.clone())),
            languages: Arc::new(PgLanguageRepository::new(pool.clone())),
            components: Arc::new(PgComponentRepository::new(pool.clone())),
            notes: Arc::new(PgNoteRepository::new(pool.clone())),
        };

        Self {
            backend: Backend::Postgres(pool),
            repositories,
        }
    }

    /// Wraps an in-memory store. The caller may keep `memory` to seed data.
    pub fn from_memory(memory: MemoryStore) -> Self {
        let repositories = Repositories {
            authors: memory.authors,
            languages: memory.languages,
            components: memory.components,
            notes: memory.notes,
        };

        Self {
            backend: Backend::Memory,
            repositories,
        }
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repositories
    }

    /// Short backend name for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Checks that the backend answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database query fails.
    pub async fn ping(&self) -> Result<(), AppError> {
        match &self.backend {
            Backend::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool.as_ref()).await?;
                Ok(())
            }
            Backend::Memory => Ok(()),
        }
    }

    /// Closes database connections. In-memory stores have nothing to release.
    pub async fn close(&self) {
        if let Backend::Postgres(pool) = &self.backend {
            pool.close().await;
            tracing::info!("Database connections closed");
        }
    }
}

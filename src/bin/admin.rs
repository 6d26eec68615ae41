//! CLI administration tool for coding-notes.
//!
//! Provides catalog statistics, database diagnostics and a reference
//! integrity check without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Record counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Report notes pointing at missing authors, languages or components
//! cargo run --bin admin -- integrity
//!
//! # ...and strip the dangling language/component ids
//! cargo run --bin admin -- integrity --prune
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//!   (required): PostgreSQL connection

use coding_notes::application::services::{CatalogService, IntegrityReport};
use coding_notes::config::Config;
use coding_notes::infrastructure::Store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing coding-notes.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Check note references against stored records
    Integrity {
        /// Remove dangling language and component references
        #[arg(long)]
        prune: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?
        .context("DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let store = Store::from_pool(pool.clone());

    let result = match cli.command {
        Commands::Stats => handle_stats(&store).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
        Commands::Integrity { prune, yes } => handle_integrity(&store, prune, yes).await,
    };

    store.close().await;
    result
}

fn catalog_service(store: &Store) -> CatalogService {
    let repos = store.repositories().clone();
    CatalogService::new(repos.notes, repos.authors, repos.languages, repos.components)
}

/// Displays record counts.
async fn handle_stats(store: &Store) -> Result<()> {
    println!("{}", "📊 Catalog".bright_blue().bold());
    println!();

    let summary = catalog_service(store)
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count records: {}", e))?;

    for (label, count) in [
        ("Notes:", summary.notes),
        ("Authors:", summary.authors),
        ("Languages:", summary.languages),
        ("Components:", summary.components),
    ] {
        println!(
            "  {:<12} {}",
            label,
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Reports broken note references and optionally prunes them.
///
/// Notes whose author is missing are only reported: there is no safe
/// replacement author to assign.
async fn handle_integrity(store: &Store, prune: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔗 Reference Integrity".bright_blue().bold());
    println!();

    let service = catalog_service(store);
    let report = service
        .integrity_report()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to scan notes: {}", e))?;

    if report.is_clean() {
        println!("{}", "✅ All note references resolve".green().bold());
        return Ok(());
    }

    print_report(&report);

    if !prune || report.dangling.is_empty() {
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove dangling references from {} note(s)?",
                report.dangling.len()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let pruned = service
        .prune_dangling(&report)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to prune references: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Notes updated:".green().bold(),
        pruned.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_report(report: &IntegrityReport) {
    if !report.missing_author.is_empty() {
        println!("{}", "  Notes with a missing author:".yellow().bold());
        for note in &report.missing_author {
            println!(
                "    {:<6} {:<40} author {}",
                note.id.to_string().bright_black(),
                note.title.cyan(),
                note.author.to_string().red()
            );
        }
        println!();
    }

    if !report.dangling.is_empty() {
        println!("{}", "  Notes with dangling references:".yellow().bold());
        for entry in &report.dangling {
            println!(
                "    {:<6} {:<40} languages {:?} components {:?}",
                entry.note.id.to_string().bright_black(),
                entry.note.title.cyan(),
                entry.languages,
                entry.components
            );
        }
        println!();
    }
}

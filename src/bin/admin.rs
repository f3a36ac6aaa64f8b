//! CLI administration tool for content-importer.
//!
//! Inspects the Sanity project the importer writes to and manages the
//! origins allowed to call it from a browser.
//!
//! # Usage
//!
//! ```bash
//! # List existing categories and authors
//! cargo run --bin admin -- categories
//! cargo run --bin admin -- authors
//!
//! # Check configuration and store connectivity
//! cargo run --bin admin -- check
//!
//! # Manage CORS origins
//! cargo run --bin admin -- cors list
//! cargo run --bin admin -- cors add http://localhost:3000 --credentials
//! ```
//!
//! # Environment Variables
//!
//! - `SANITY_PROJECT_ID` (required): project to inspect
//! - `SANITY_TOKEN`: required for CORS management and private datasets
//!
//! Everything else is read the same way the importer reads it.

use content_importer::config::{self, Config};
use content_importer::domain::entities::ReferenceKind;
use content_importer::domain::repositories::ContentStore;
use content_importer::infrastructure::store::{
    CorsOrigin, SanityContentStore, SanityManagementClient,
};
use content_importer::logging::init_logging;
use content_importer::utils::normalize_origin;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for inspecting the content store.
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
    /// List categories in the dataset
    Categories,

    /// List authors in the dataset
    Authors,

    /// Check configuration and store connectivity
    Check,

    /// Manage allowed CORS origins
    Cors {
        #[command(subcommand)]
        action: CorsAction,
    },
}

/// CORS management subcommands.
#[derive(Subcommand)]
enum CorsAction {
    /// List allowed origins
    List,

    /// Allow a new origin
    Add {
        /// Origin to allow (e.g., "http://localhost:3000")
        origin: String,

        /// Allow credentialed requests (cookies, authorization headers)
        #[arg(long)]
        credentials: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_logging(&config.log_level, &config.log_format);

    match cli.command {
        Commands::Categories => list_entities(&config, ReferenceKind::Category).await?,
        Commands::Authors => list_entities(&config, ReferenceKind::Author).await?,
        Commands::Check => handle_check(&config).await?,
        Commands::Cors { action } => handle_cors_action(action, &config).await?,
    }

    Ok(())
}

fn content_store(config: &Config) -> Result<SanityContentStore> {
    SanityContentStore::new(config.endpoint()?, config.token.clone())
        .context("Failed to create content store client")
}

/// Lists categories or authors with their slugs and ids.
///
/// # Output Format
///
/// ```text
/// 📋 Categories
///
///   Name                           Slug                      ID
///   ───────────────────────────────────────────────────────────────────────────
///   Web Development                web-development           3f1c9a...
/// ```
async fn list_entities(config: &Config, kind: ReferenceKind) -> Result<()> {
    let heading = match kind {
        ReferenceKind::Category => "📋 Categories",
        ReferenceKind::Author => "📋 Authors",
    };
    println!("{}", heading.bright_blue().bold());
    println!();

    let store = content_store(config)?;
    let entities = store
        .list_entities(kind)
        .await
        .with_context(|| format!("Failed to list {} documents", kind))?;

    if entities.is_empty() {
        println!("{}", format!("  No {} documents found", kind).yellow());
        println!();
        println!(
            "  They are created on the first import with: {}",
            "cargo run --bin content-importer".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<30} {:<25} {}",
        "Name".bright_white().bold(),
        "Slug".bright_white().bold(),
        "ID".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entity in &entities {
        let name = entity.name.as_deref().unwrap_or("(unnamed)");
        let slug = entity.slug.as_deref().unwrap_or("-");

        println!(
            "  {:<30} {:<25} {}",
            name.cyan(),
            slug,
            entity.id.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        entities.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the configuration summary and runs one list query.
async fn handle_check(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking content store...".bright_blue());
    println!();

    config.print_summary();

    let store = content_store(config)?;
    if !store.has_write_credential() {
        println!(
            "{}",
            "⚠️  SANITY_TOKEN is not set; imports will be refused".yellow()
        );
    }

    let categories = store
        .list_entities(ReferenceKind::Category)
        .await
        .context("Content store did not answer")?;

    println!(
        "{} ({} categories)",
        "✅ Content store connection OK".green().bold(),
        categories.len()
    );

    Ok(())
}

/// Dispatches CORS management commands.
async fn handle_cors_action(action: CorsAction, config: &Config) -> Result<()> {
    let token = config
        .token
        .clone()
        .context("SANITY_TOKEN must be set to manage CORS origins")?;
    let client = SanityManagementClient::new(config.api_host.as_deref(), &config.project_id, token)
        .context("Failed to create management client")?;

    match action {
        CorsAction::List => list_cors_origins(&client).await,
        CorsAction::Add {
            origin,
            credentials,
            yes,
        } => add_cors_origin(&client, &origin, credentials, yes).await,
    }
}

async fn list_cors_origins(client: &SanityManagementClient) -> Result<()> {
    println!("{}", "🌐 CORS Origins".bright_blue().bold());
    println!();

    let origins = client
        .list_cors_origins()
        .await
        .context("Failed to list CORS origins")?;

    if origins.is_empty() {
        println!("{}", "  No origins allowed".yellow());
        return Ok(());
    }

    println!(
        "  {:<45} {}",
        "Origin".bright_white().bold(),
        "Credentials".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for origin in &origins {
        let credentials = if origin.allow_credentials {
            "yes".green()
        } else {
            "no".bright_black()
        };
        println!("  {:<45} {}", origin.origin.cyan(), credentials);
    }

    println!();
    println!(
        "  Total: {}",
        origins.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Adds an origin after normalizing it and asking for confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Origins already in the list are reported and left untouched
async fn add_cors_origin(
    client: &SanityManagementClient,
    input: &str,
    credentials: bool,
    yes: bool,
) -> Result<()> {
    println!("{}", "🌐 Add CORS Origin".bright_blue().bold());
    println!();

    let origin = normalize_origin(input).with_context(|| format!("Invalid origin: {}", input))?;

    let existing = client
        .list_cors_origins()
        .await
        .context("Failed to list CORS origins")?;
    if existing.iter().any(|o| o.origin == origin) {
        println!("{}", "⚠️  This origin is already allowed".yellow());
        return Ok(());
    }

    println!("  Origin:      {}", origin.cyan());
    println!(
        "  Credentials: {}",
        if credentials { "allowed" } else { "not allowed" }
    );
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Allow this origin?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let created = client
        .add_cors_origin(&CorsOrigin {
            origin,
            allow_credentials: credentials,
        })
        .await
        .context("Failed to add CORS origin")?;

    println!();
    println!(
        "{} {}",
        "✅ Origin allowed:".green().bold(),
        created.origin.cyan()
    );
    println!();

    Ok(())
}

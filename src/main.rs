//! Markdown → Sanity import.
//!
//! Reads the content folder, publishes one post per markdown file and removes
//! (or archives) each file once its post exists. Exits with status 0 when the
//! run completes, even if some files failed; those are reported in the log.

use content_importer::application::services::{MigrationOptions, MigrationService};
use content_importer::config::{self, Config};
use content_importer::domain::entities::MigrationResult;
use content_importer::domain::repositories::ContentStore;
use content_importer::error::MigrationError;
use content_importer::infrastructure::content::SourceCleanup;
use content_importer::infrastructure::store::{DryRunStore, SanityContentStore};
use content_importer::logging::init_logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Publish markdown files to a Sanity dataset.
#[derive(Parser)]
#[command(name = "content-importer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder scanned for markdown files
    #[arg(long, env = "CONTENT_DIR", value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Move processed files to the backup folder instead of deleting them
    #[arg(long)]
    backup: bool,

    /// Backup folder for processed files
    #[arg(long, env = "BACKUP_DIR", value_name = "DIR")]
    backup_dir: Option<PathBuf>,

    /// Resolve and publish without writing to the store; files are kept
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the environment configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(ref dir) = self.content_dir {
            config.content_dir = dir.clone();
        }
        if let Some(ref dir) = self.backup_dir {
            config.backup_dir = dir.clone();
        }
        if self.backup {
            config.create_backups = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env().context("Invalid configuration")?;
    cli.apply(&mut config);

    init_logging(&config.log_level, &config.log_format);
    config.print_summary();

    let store = SanityContentStore::new(config.endpoint()?, config.token.clone())
        .context("Failed to create content store client")?;

    let outcome = if cli.dry_run {
        let options = MigrationOptions {
            cleanup: SourceCleanup::Keep,
            ..options(&config)
        };
        run(DryRunStore::new(store), options).await
    } else {
        run(store, options(&config)).await
    };

    match outcome {
        Ok(result) => {
            tracing::info!(
                succeeded = result.succeeded,
                failed = result.failed,
                skipped = result.skipped,
                "Migration process finished with status: SUCCESS"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Migration process finished with status: FAILURE");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn options(config: &Config) -> MigrationOptions {
    MigrationOptions {
        content_dir: config.content_dir.clone(),
        cleanup: config.cleanup(),
        author: config.author.clone(),
    }
}

async fn run<S: ContentStore>(
    store: S,
    options: MigrationOptions,
) -> Result<MigrationResult, MigrationError> {
    let mut service = MigrationService::new(Arc::new(store), options);
    service.run().await
}

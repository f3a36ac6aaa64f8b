//! Importer configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any file is read.
//! Variables may come from the process environment or from a `.env` file loaded
//! by the binaries with `dotenvy`.
//!
//! ## Required Variables
//!
//! - `SANITY_PROJECT_ID` - Project that owns the dataset
//!
//! ## Optional Variables
//!
//! - `SANITY_TOKEN` - Write token. Loading succeeds without it, but an import run
//!   refuses to start
//! - `SANITY_DATASET` - Dataset name (default: `production`)
//! - `SANITY_API_VERSION` - Date-based API version (default: `2023-05-03`)
//! - `SANITY_API_HOST` - Overrides `https://<project>.api.sanity.io`
//! - `CONTENT_DIR` - Folder scanned for markdown files (default: `./content`)
//! - `BACKUP_DIR` - Where processed files are moved (default: `./content-processed`)
//! - `CREATE_BACKUPS` - Move processed files instead of deleting them (default: `false`)
//! - `AUTHOR_NAME` / `AUTHOR_BIO` - Author created when the dataset has none
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::domain::entities::AuthorProfile;
use crate::infrastructure::content::SourceCleanup;
use crate::infrastructure::store::SanityEndpoint;
use crate::utils::mask_secret;
use anyhow::{Context, Result};
use regex::Regex;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

static PROJECT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());
static DATASET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").unwrap());
static API_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?\d{4}-\d{2}-\d{2}$").unwrap());

/// Importer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Overrides the default API host; mostly useful against a local proxy.
    pub api_host: Option<String>,
    /// Write token. `None` when unset or empty.
    pub token: Option<String>,
    pub content_dir: PathBuf,
    pub backup_dir: PathBuf,
    /// When true, processed files are moved to `backup_dir` instead of being deleted.
    pub create_backups: bool,
    pub author: AuthorProfile,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SANITY_PROJECT_ID` is missing.
    pub fn from_env() -> Result<Self> {
        let project_id = env::var("SANITY_PROJECT_ID").context("SANITY_PROJECT_ID must be set")?;
        let dataset = env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string());
        let api_version =
            env::var("SANITY_API_VERSION").unwrap_or_else(|_| "2023-05-03".to_string());
        let api_host = non_empty_var("SANITY_API_HOST");
        let token = non_empty_var("SANITY_TOKEN");

        let content_dir = env::var("CONTENT_DIR").unwrap_or_else(|_| "./content".to_string());
        let backup_dir =
            env::var("BACKUP_DIR").unwrap_or_else(|_| "./content-processed".to_string());
        let create_backups = env::var("CREATE_BACKUPS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let defaults = AuthorProfile::default();
        let author = AuthorProfile {
            name: env::var("AUTHOR_NAME").unwrap_or(defaults.name),
            bio: env::var("AUTHOR_BIO").unwrap_or(defaults.bio),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            project_id,
            dataset,
            api_version,
            api_host,
            token,
            content_dir: PathBuf::from(content_dir),
            backup_dir: PathBuf::from(backup_dir),
            create_backups,
            author,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// A missing token is not a validation error: read-only commands work
    /// without one, and the import itself reports it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `project_id` or `dataset` contain characters the API does not accept
    /// - `api_version` is not a `YYYY-MM-DD` date
    /// - `api_host` is not an `http(s)://` URL
    /// - `log_format` is not `text` or `json`
    /// - the author name is empty
    pub fn validate(&self) -> Result<()> {
        if !PROJECT_ID_REGEX.is_match(&self.project_id) {
            anyhow::bail!(
                "SANITY_PROJECT_ID must contain only a-z, 0-9 and '-', got '{}'",
                self.project_id
            );
        }

        if !DATASET_REGEX.is_match(&self.dataset) {
            anyhow::bail!(
                "SANITY_DATASET must be 1-64 lowercase characters (a-z, 0-9, '_', '-'), got '{}'",
                self.dataset
            );
        }

        if !API_VERSION_REGEX.is_match(&self.api_version) {
            anyhow::bail!(
                "SANITY_API_VERSION must be a date like 2023-05-03, got '{}'",
                self.api_version
            );
        }

        if let Some(ref host) = self.api_host
            && !host.starts_with("http://")
            && !host.starts_with("https://")
        {
            anyhow::bail!(
                "SANITY_API_HOST must start with 'http://' or 'https://', got '{}'",
                host
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.author.name.trim().is_empty() {
            anyhow::bail!("AUTHOR_NAME must not be empty");
        }

        Ok(())
    }

    /// Returns what happens to a source file after its entry is created.
    pub fn cleanup(&self) -> SourceCleanup {
        if self.create_backups {
            SourceCleanup::Backup {
                dir: self.backup_dir.clone(),
            }
        } else {
            SourceCleanup::Delete
        }
    }

    /// Builds the data API endpoint for the configured dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the host, project and version do not form a valid URL.
    pub fn endpoint(&self) -> Result<SanityEndpoint> {
        SanityEndpoint::new(
            self.api_host.as_deref(),
            &self.project_id,
            &self.api_version,
            &self.dataset,
        )
        .context("Failed to build content store URL")
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Project: {}", self.project_id);
        tracing::info!("  Dataset: {}", self.dataset);
        tracing::info!("  API version: {}", self.api_version);
        if let Some(ref host) = self.api_host {
            tracing::info!("  API host: {}", host);
        }

        match self.token {
            Some(ref token) => tracing::info!("  Token: {}", mask_secret(token)),
            None => tracing::info!("  Token: not set"),
        }

        tracing::info!("  Content folder: {}", self.content_dir.display());
        if self.create_backups {
            tracing::info!("  Processed files: moved to {}", self.backup_dir.display());
        } else {
            tracing::info!("  Processed files: deleted");
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 12] = [
        "SANITY_PROJECT_ID",
        "SANITY_DATASET",
        "SANITY_API_VERSION",
        "SANITY_API_HOST",
        "SANITY_TOKEN",
        "CONTENT_DIR",
        "BACKUP_DIR",
        "CREATE_BACKUPS",
        "AUTHOR_NAME",
        "AUTHOR_BIO",
        "LOG_FORMAT",
        "RUST_LOG",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn test_config() -> Config {
        Config {
            project_id: "090e1vat".to_string(),
            dataset: "production".to_string(),
            api_version: "2023-05-03".to_string(),
            api_host: None,
            token: Some("sk-test-token".to_string()),
            content_dir: PathBuf::from("./content"),
            backup_dir: PathBuf::from("./content-processed"),
            create_backups: false,
            author: AuthorProfile::default(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.project_id = "My Project".to_string();
        assert!(config.validate().is_err());
        config.project_id = "090e1vat".to_string();

        config.dataset = "Production!".to_string();
        assert!(config.validate().is_err());
        config.dataset = "staging_2".to_string();
        assert!(config.validate().is_ok());

        config.api_version = "latest".to_string();
        assert!(config.validate().is_err());
        config.api_version = "v2021-06-07".to_string();
        assert!(config.validate().is_ok());

        config.api_host = Some("ftp://example.com".to_string());
        assert!(config.validate().is_err());
        config.api_host = Some("http://127.0.0.1:9000".to_string());
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();

        config.author.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_token_is_valid() {
        let config = Config {
            token: None,
            ..test_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cleanup_mode() {
        let mut config = test_config();
        assert_eq!(config.cleanup(), SourceCleanup::Delete);

        config.create_backups = true;
        assert_eq!(
            config.cleanup(),
            SourceCleanup::Backup {
                dir: PathBuf::from("./content-processed")
            }
        );
    }

    #[test]
    fn test_endpoint() {
        let endpoint = test_config().endpoint().unwrap();
        assert_eq!(
            endpoint.mutate_url().as_str(),
            "https://090e1vat.api.sanity.io/v2023-05-03/data/mutate/production?returnIds=true"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SANITY_PROJECT_ID", "abc123");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.project_id, "abc123");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2023-05-03");
        assert!(config.token.is_none());
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert!(!config.create_backups);
        assert_eq!(config.author, AuthorProfile::default());
        assert_eq!(config.log_format, "text");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SANITY_PROJECT_ID", "abc123");
            env::set_var("SANITY_TOKEN", "sk-secret");
            env::set_var("SANITY_API_HOST", "  ");
            env::set_var("CREATE_BACKUPS", "TRUE");
            env::set_var("BACKUP_DIR", "/tmp/done");
            env::set_var("AUTHOR_NAME", "Ada Lovelace");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.token.as_deref(), Some("sk-secret"));
        assert!(config.api_host.is_none());
        assert!(config.create_backups);
        assert_eq!(config.backup_dir, PathBuf::from("/tmp/done"));
        assert_eq!(config.author.name, "Ada Lovelace");
        assert_eq!(config.author.bio, AuthorProfile::default().bio);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_project() {
        clear_env();
        assert!(Config::from_env().is_err());
    }
}

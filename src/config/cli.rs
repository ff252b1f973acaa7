use crate::config::toml_config::AppConfig;
use crate::domain::options::{Gender, Nationality};
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "randomuser")]
#[command(about = "Fetch random user profiles from randomuser.me and keep a local list")]
#[command(version)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the cache database path
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Keep fetched users in memory only
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch one random user and add it to the list
    Generate {
        /// male or female
        #[arg(short, long)]
        gender: Option<Gender>,

        /// Nationality code, e.g. US, GB, NZ
        #[arg(short, long)]
        nat: Option<Nationality>,

        /// Print the full profile instead of the list
        #[arg(long)]
        detail: bool,
    },
    /// Show cached users, newest first
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show one cached user by login uuid
    Show { uuid: String },
    /// List accepted gender and nationality values
    Options,
    /// Remove every cached user
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl CliArgs {
    /// Load the config file (if any) and apply command line overrides on top.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                AppConfig::from_file(Path::new(path))?
            }
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(db_path) = &self.db_path {
            config.storage.db_path = db_path.clone();
        }
        if self.no_cache {
            config.storage.enabled = false;
        }

        Ok(config)
    }
}

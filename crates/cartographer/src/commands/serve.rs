//! `cartographer serve` command implementation.

use std::path::PathBuf;

use carto_config::{CliSettings, Config};
use carto_server::{run_server, server_config_from_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover cartographer.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Sitemap destination path (overrides config).
    #[arg(long)]
    sitemap_path: Option<String>,

    /// List directories only (overrides config).
    #[arg(long)]
    skip_files: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            sitemap_path: self.sitemap_path,
            skip_files: self.skip_files.then_some(true),
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting webhook server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("GitHub API: {}", config.github.api_url));
        output.info(&format!("Sitemap path: {}", config.sitemap.path));
        if let Some(prefix) = &config.sitemap.path_prefix {
            output.info(&format!("Restricted to prefix: {prefix}"));
        }
        if config.sitemap.skip_files {
            output.info("Mode: directories only");
        }
        if config.github.token.is_none() {
            output.info("No GitHub token configured; sitemap commits will fail for private repositories");
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}

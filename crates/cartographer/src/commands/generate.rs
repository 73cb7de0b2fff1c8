//! `cartographer generate` command implementation.

use std::io::Write;
use std::path::PathBuf;

use carto_config::Config;
use carto_github::GitHubClient;
use carto_server::{SitemapSettings, render_sitemap, update_sitemap};
use carto_sitemap::SitemapOptions;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Repository in `owner/name` form.
    repo: String,

    /// Git reference to list: a branch name, commit sha or tree sha.
    #[arg(short = 'r', long = "ref", default_value = "master")]
    git_ref: String,

    /// Commit the sitemap back to the repository instead of printing it.
    #[arg(long)]
    write: bool,

    /// Path to configuration file (default: auto-discover cartographer.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, the tree fetch, or the write-back
    /// fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if !self.repo.contains('/') {
            return Err(CliError::Validation(format!(
                "repository must be in owner/name form, got '{}'",
                self.repo
            )));
        }

        let config = Config::load(self.config.as_deref(), None)?;
        let client = GitHubClient::new(&config.github.api_url, config.github.token.clone());

        let settings = SitemapSettings {
            options: SitemapOptions {
                sitemap_path: config.sitemap.path.clone(),
                path_prefix: config.sitemap.path_prefix.clone(),
                skip_files: config.sitemap.skip_files,
            },
            branch: config.sitemap.branch.clone(),
            committer: config.sitemap.committer.clone(),
        };

        if self.write {
            update_sitemap(&client, &settings, &self.repo, &self.git_ref)?;
            output.success(&format!(
                "Committed {} to {} on {}",
                settings.options.sitemap_path, self.repo, settings.branch
            ));
        } else {
            let listing = client.get_tree(&self.repo, &self.git_ref, true)?;
            let document = render_sitemap(&listing, &settings.options);
            std::io::stdout().write_all(document.as_bytes())?;
        }

        Ok(())
    }
}

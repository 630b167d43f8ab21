//! Configuration management for `sitemap.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[base]`      | Site location (url, path prefix)               |
//! | `[build]`     | Build output, page manifest, minification      |
//! | `[sitemap]`   | Selection patterns, per-pattern metadata       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://example.com"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [sitemap]
//! exclude = ["/drafts/**"]
//! images = true
//!
//! [sitemap.config."/blog/**"]
//! priority = 0.8
//! changefreq = "weekly"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod sitemap;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;
pub use sitemap::{PatternConfig, SitemapConfig};

use crate::{cli::Cli, sitemap::SitemapError};
use anyhow::{Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site location
    #[serde(default)]
    pub base: BaseConfig,

    /// Build output settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path the sitemap is written to.
    ///
    /// `sitemap.output` is relative to the build output directory even when
    /// written with a leading slash.
    pub fn output_path(&self) -> PathBuf {
        let relative = self
            .sitemap
            .output
            .strip_prefix("/")
            .unwrap_or(&self.sitemap.output);
        self.build.output.join(relative)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        let args = cli.args();
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.pages, args.pages.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.sitemap.images, args.images.as_ref());
        Self::update_option(&mut self.base.path_prefix, args.path_prefix.as_ref());
        if args.site_url.is_some() {
            self.base.url = args.site_url.clone();
        }

        self.update_path_with_root(&root, &cli.config);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and make them absolute
    fn update_path_with_root(&mut self, root: &Path, config: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.pages = Self::normalize_path(&root.join(&self.build.pages));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    ///
    /// Runs before any page is read, so a missing site URL is reported first.
    pub fn validate(&self) -> Result<()> {
        if self.base.hostname().is_none() {
            bail!(SitemapError::MissingSiteUrl);
        }

        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.sitemap.output.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "[sitemap.output] must not be empty".into()
            ));
        }

        self.sitemap.validate()?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

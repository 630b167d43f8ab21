//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap generator for tola sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: sitemap.toml)
    #[arg(short = 'C', long, default_value = "sitemap.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared arguments for Build and Check commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SitemapArgs {
    /// Page manifest written by the build (relative to project root)
    #[arg(long)]
    pub pages: Option<PathBuf>,

    /// Build output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the site URL.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example:
    ///   tola-sitemap build --site-url "https://tola-ssg.github.io/example-sites/starter"
    #[arg(long = "site-url")]
    pub site_url: Option<String>,

    /// Override the site path prefix, e.g. "/blog"
    #[arg(long = "path-prefix")]
    pub path_prefix: Option<String>,

    /// Collect images from rendered page data
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub images: Option<bool>,

    /// Minify the sitemap xml
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the sitemap and write it into the build output
    Build {
        #[command(flatten)]
        args: SitemapArgs,
    },

    /// List the URLs the sitemap would contain without writing it
    Check {
        #[command(flatten)]
        args: SitemapArgs,
    },
}

impl Cli {
    /// Arguments shared by every subcommand
    pub const fn args(&self) -> &SitemapArgs {
        match &self.command {
            Commands::Build { args } | Commands::Check { args } => args,
        }
    }
}

//! tola-sitemap - sitemap generation for tola site builds.

use anyhow::{Context, Result};
use clap::Parser;
use std::{path::Path, process::ExitCode};
use tola_sitemap::{
    cli::{Cli, Commands},
    config::SiteConfig,
    log,
    page::Page,
    sitemap::{Sitemap, build_sitemap, emit::absolute_url},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let pages = Page::load_manifest(&config.build.pages).context("Failed to load pages")?;

    match &cli.command {
        Commands::Build { .. } => {
            build_sitemap(&config, &pages).context("Failed to build sitemap")?;
        }
        Commands::Check { .. } => check_sitemap(&config, &pages)?,
    }

    Ok(())
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; everything can come from flags.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)
            .with_context(|| format!("Failed to load `{}`", config_path.display()))?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Log every URL the sitemap would contain.
fn check_sitemap(config: &SiteConfig, pages: &[Page]) -> Result<()> {
    let sitemap = Sitemap::build(pages, config)?;

    for entry in sitemap.urls() {
        log!("check"; "{}", absolute_url(sitemap.hostname(), &entry.url));
    }
    log!("check"; "{} urls ({} pages in manifest)", sitemap.urls().len(), pages.len());

    Ok(())
}

//! Sitemap generation from built pages.
//!
//! Runs after the site build, over the page manifest it produced:
//!
//! ```text
//! pages ─► PageFilter ─► RuleTable ─► images ─► assemble ─┐
//!                                                          ├─► emit ─► sitemap.xml
//!                               [[sitemap.static_urls]] ──┘
//! ```
//!
//! Per-page work is independent and runs in parallel; entry order follows
//! the page order.

pub mod emit;
pub mod entry;
mod error;
pub mod images;
pub mod path;
pub mod pattern;
pub mod resolve;
pub mod select;

pub use emit::{SitemapDocument, SitemapEmitter, XmlEmitter};
pub use entry::{ChangeFreq, ImageEntry, Lastmod, UrlEntry, UrlMeta};
pub use error::SitemapError;
pub use resolve::RuleTable;
pub use select::PageFilter;

use crate::{config::SiteConfig, log, page::Page};
use images::page_images;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Build the sitemap for `pages` and write it into the build output.
///
/// Returns the path written to.
pub fn build_sitemap(config: &SiteConfig, pages: &[Page]) -> Result<PathBuf, SitemapError> {
    let sitemap = Sitemap::build(pages, config)?;
    let path = config.output_path();
    sitemap.write(&path, &XmlEmitter::new(config.build.minify))?;

    log!(
        "sitemap";
        "generate {} ({} pages)",
        config.sitemap.output.display(),
        sitemap.urls().len()
    );
    Ok(path)
}

/// Assembled sitemap, ready to emit.
#[derive(Debug, Clone)]
pub struct Sitemap {
    hostname: String,
    cache_time: u64,
    /// Derived entries in page order, then static entries
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Select pages, attach metadata and images, and append static entries.
    ///
    /// Fails before touching any page when no site URL is configured.
    pub fn build(pages: &[Page], config: &SiteConfig) -> Result<Self, SitemapError> {
        let hostname = config.base.hostname().ok_or(SitemapError::MissingSiteUrl)?;

        let filter = PageFilter::new(&config.sitemap.include, &config.sitemap.exclude)?;
        let rules = RuleTable::new(&config.sitemap.config)?;
        let prefix = config.base.url_prefix();
        let with_images = config.sitemap.images;

        let mut urls: Vec<UrlEntry> = filter
            .select(pages)
            .into_par_iter()
            .map(|page| {
                let meta = rules.resolve(&page.path);
                let images = with_images.then(|| page_images(page));
                entry::assemble(page, meta, images, &prefix)
            })
            .collect();

        urls.extend(config.sitemap.static_urls.iter().cloned());

        Ok(Self {
            hostname,
            cache_time: config.sitemap.cache_time,
            urls,
        })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn document(&self) -> SitemapDocument<'_> {
        SitemapDocument {
            hostname: &self.hostname,
            cache_time: self.cache_time,
            urls: &self.urls,
        }
    }

    /// Serialize with `emitter`.
    pub fn render<E: SitemapEmitter + ?Sized>(&self, emitter: &E) -> Result<String, SitemapError> {
        emitter.emit(&self.document())
    }

    /// Render and write to `path`, replacing any existing file.
    ///
    /// The document is rendered fully before anything is written.
    pub fn write<E: SitemapEmitter + ?Sized>(
        &self,
        path: &Path,
        emitter: &E,
    ) -> Result<(), SitemapError> {
        let content = self.render(emitter)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| SitemapError::Write(path.to_owned(), err))?;
        }
        fs::write(path, content).map_err(|err| SitemapError::Write(path.to_owned(), err))
    }
}

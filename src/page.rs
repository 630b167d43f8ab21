//! Built pages handed over by the site build.
//!
//! The build writes one JSON manifest listing every page it produced:
//!
//! ```json
//! [
//!   { "path": "/", "dataOutput": ".data/index.json" },
//!   { "path": "/old-post", "type": "redirect" },
//!   { "path": "/feed", "publicPath": "/feed.xml" }
//! ]
//! ```
//!
//! Relative `dataOutput` paths are resolved against the manifest directory.

use crate::sitemap::SitemapError;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Page type that is listed in sitemaps. Untyped pages count as static.
pub const STATIC_PAGE: &str = "static";

/// A single built page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Route path (e.g., `/posts/hello`)
    pub path: String,

    /// Page type tag; `None` means static
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Explicit public URL, used verbatim instead of the route path
    #[serde(default)]
    pub public_path: Option<String>,

    /// Rendered page data (JSON) written by the build
    #[serde(default)]
    pub data_output: Option<PathBuf>,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Whether this page is a plain static page.
    pub fn is_static(&self) -> bool {
        self.kind.as_deref().is_none_or(|kind| kind == STATIC_PAGE)
    }

    /// Load the page queue from a JSON manifest.
    pub fn load_manifest(path: &Path) -> Result<Vec<Self>, SitemapError> {
        let content =
            fs::read_to_string(path).map_err(|err| SitemapError::Manifest(path.to_owned(), err))?;
        let mut pages: Vec<Self> = serde_json::from_str(&content)
            .map_err(|err| SitemapError::ManifestFormat(path.to_owned(), err))?;

        let base = path.parent().unwrap_or(Path::new(""));
        for page in &mut pages {
            if let Some(data) = page.data_output.as_mut()
                && data.is_relative()
            {
                *data = base.join(&*data);
            }
        }

        Ok(pages)
    }
}

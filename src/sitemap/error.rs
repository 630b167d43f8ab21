//! Sitemap pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a sitemap run.
///
/// Page data that cannot be loaded is not an error: such pages simply
/// contribute no images.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Sitemap is missing a required site url ([base.url])")]
    MissingSiteUrl,

    #[error("Invalid glob pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error when reading page manifest `{0}`")]
    Manifest(PathBuf, #[source] std::io::Error),

    #[error("Page manifest `{0}` is not a valid page list")]
    ManifestFormat(PathBuf, #[source] serde_json::Error),

    #[error("Failed to write sitemap to `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Sitemap emitter failed: {0}")]
    Emit(String),
}

//! Sitemap entries and their assembly from pages.

use super::path::with_trailing_slash;
use crate::{page::Page, utils::date::W3cDateTime};
use serde::{Deserialize, Deserializer};
use std::fmt;

// ============================================================================
// Metadata
// ============================================================================

/// How frequently a page is likely to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Last modification time, kept as written.
///
/// Deserializes from a string or a TOML date/datetime literal
/// (`lastmod = 2025-01-01`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lastmod(String);

impl Lastmod {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed datetime, `None` if the value is not a W3C datetime.
    pub fn parse(&self) -> Option<W3cDateTime> {
        W3cDateTime::parse(&self.0)
    }
}

impl fmt::Display for Lastmod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Lastmod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match toml::Value::deserialize(deserializer)? {
            toml::Value::String(s) => Ok(Self(s)),
            toml::Value::Datetime(dt) => Ok(Self(dt.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a date string or datetime, found {}",
                other.type_str()
            ))),
        }
    }
}

/// Per-pattern metadata from `[sitemap.config]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlMeta {
    /// Relative priority in `0.0..=1.0`
    #[serde(default)]
    pub priority: Option<f32>,

    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,

    #[serde(default)]
    pub lastmod: Option<Lastmod>,
}

impl UrlMeta {
    pub const EMPTY: Self = Self {
        priority: None,
        changefreq: None,
        lastmod: None,
    };
}

// ============================================================================
// Entries
// ============================================================================

/// An image attached to a sitemap entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageEntry {
    pub url: String,
}

/// Single URL entry in the sitemap.
///
/// Derived entries carry a site-relative `url`; static entries from the
/// config may also be absolute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlEntry {
    pub url: String,

    #[serde(default)]
    pub priority: Option<f32>,

    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,

    #[serde(default)]
    pub lastmod: Option<Lastmod>,

    /// `None` when image extraction is disabled, possibly empty otherwise
    #[serde(default)]
    pub images: Option<Vec<ImageEntry>>,
}

impl UrlEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            priority: None,
            changefreq: None,
            lastmod: None,
            images: None,
        }
    }

    /// Metadata part of this entry.
    pub fn meta(&self) -> UrlMeta {
        UrlMeta {
            priority: self.priority,
            changefreq: self.changefreq,
            lastmod: self.lastmod.clone(),
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Public URL of a page: its explicit public path, or the route path with
/// exactly one trailing slash.
pub fn page_url(page: &Page) -> String {
    match &page.public_path {
        Some(public) => public.clone(),
        None => with_trailing_slash(&page.path),
    }
}

/// Strip the site path prefix from the front of `url`.
///
/// URLs outside the prefix are returned unchanged.
pub fn strip_path_prefix<'a>(url: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return url;
    }
    url.strip_prefix(prefix).unwrap_or(url)
}

/// Build the sitemap entry for a selected page.
///
/// `images` is `None` when image extraction is disabled.
pub fn assemble(
    page: &Page,
    meta: &UrlMeta,
    images: Option<Vec<String>>,
    path_prefix: &str,
) -> UrlEntry {
    let url = page_url(page);

    UrlEntry {
        url: strip_path_prefix(&url, path_prefix).to_owned(),
        priority: meta.priority,
        changefreq: meta.changefreq,
        lastmod: meta.lastmod.clone(),
        images: images.map(|urls| urls.into_iter().map(|url| ImageEntry { url }).collect()),
    }
}

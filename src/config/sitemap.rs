//! `[sitemap]` section configuration.
//!
//! Which pages are listed and the metadata attached to them.
//!
//! Patterns in `include`, `exclude` and `config` keys are path globs (`*`,
//! `**`, `?`, `[..]`, `{a,b}`). A leading `!` is not a negation; list such
//! paths under `exclude`. `*` also matches dot-prefixed segments.

use super::{defaults, error::ConfigError};
use crate::sitemap::entry::{UrlEntry, UrlMeta};
use educe::Educe;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::{fmt, path::PathBuf};

/// `[sitemap]` section in sitemap.toml.
///
/// # Example
/// ```toml
/// [sitemap]
/// output = "/sitemap.xml"
/// exclude = ["/drafts/**"]
/// images = true
///
/// [sitemap.config."/blog/**"]
/// priority = 0.8
/// changefreq = "weekly"
///
/// [[sitemap.static_urls]]
/// url = "https://example.com/external/"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SitemapConfig {
    /// Output path, relative to the build output directory.
    #[serde(default = "defaults::sitemap::output")]
    #[educe(Default = defaults::sitemap::output())]
    pub output: PathBuf,

    /// Cache directive forwarded to the emitter, in milliseconds.
    #[serde(default = "defaults::sitemap::cache_time")]
    #[educe(Default = defaults::sitemap::cache_time())]
    pub cache_time: u64,

    /// Entries appended verbatim after the derived ones.
    pub static_urls: Vec<UrlEntry>,

    /// Glob patterns a page must match. Empty means every page.
    pub include: Vec<String>,

    /// Glob patterns that drop a page. `/404` is always excluded.
    pub exclude: Vec<String>,

    /// Per-pattern metadata, first match wins.
    pub config: PatternConfig,

    /// Collect images from each page's rendered data.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub images: bool,
}

impl SitemapConfig {
    /// Check metadata values in `config` and `static_urls`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (pattern, meta) in self.config.iter() {
            validate_meta(&format!("[sitemap.config.\"{pattern}\"]"), meta)?;
        }

        for (index, entry) in self.static_urls.iter().enumerate() {
            let field = format!("[sitemap.static_urls.{index}]");
            if entry.url.is_empty() {
                return Err(ConfigError::Validation(format!("{field} url is empty")));
            }
            validate_meta(&field, &entry.meta())?;
        }

        Ok(())
    }
}

fn validate_meta(field: &str, meta: &UrlMeta) -> Result<(), ConfigError> {
    if let Some(priority) = meta.priority
        && !(0.0..=1.0).contains(&priority)
    {
        return Err(ConfigError::Validation(format!(
            "{field} priority must be between 0.0 and 1.0, got {priority}"
        )));
    }

    if let Some(lastmod) = &meta.lastmod
        && lastmod.parse().is_none()
    {
        return Err(ConfigError::Validation(format!(
            "{field} lastmod `{lastmod}` is not a W3C datetime (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss)"
        )));
    }

    Ok(())
}

// ============================================================================
// Pattern table
// ============================================================================

/// `[sitemap.config]` table in declaration order.
///
/// A plain map would lose the order the file lists patterns in, which
/// decides the winner when several patterns match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternConfig(Vec<(String, UrlMeta)>);

impl PatternConfig {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &UrlMeta)> {
        self.0.iter().map(|(pattern, meta)| (pattern, meta))
    }
}

impl FromIterator<(String, UrlMeta)> for PatternConfig {
    fn from_iter<I: IntoIterator<Item = (String, UrlMeta)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for PatternConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = PatternConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of glob patterns to url metadata")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rules = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((pattern, meta)) = map.next_entry::<String, UrlMeta>()? {
                    rules.push((pattern, meta));
                }
                Ok(PatternConfig(rules))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;
    use crate::sitemap::entry::{ChangeFreq, Lastmod};

    fn parse(config: &str) -> SitemapConfig {
        toml::from_str::<SiteConfig>(config).unwrap().sitemap
    }

    #[test]
    fn test_sitemap_config_defaults() {
        let sitemap = parse("");

        assert_eq!(sitemap.output, PathBuf::from("/sitemap.xml"));
        assert_eq!(sitemap.cache_time, 600_000);
        assert!(sitemap.static_urls.is_empty());
        assert!(sitemap.include.is_empty());
        assert!(sitemap.exclude.is_empty());
        assert!(sitemap.config.iter().next().is_none());
        assert!(!sitemap.images);
    }

    #[test]
    fn test_sitemap_config_full() {
        let sitemap = parse(
            r#"
            [sitemap]
            output = "/maps/sitemap.xml"
            cache_time = 0
            include = ["/blog/**"]
            exclude = ["/blog/drafts/**"]
            images = true

            [sitemap.config."/blog/**"]
            priority = 0.8
            changefreq = "weekly"
            lastmod = 2025-01-01

            [[sitemap.static_urls]]
            url = "https://example.com/external/"
            priority = 0.3

            [[sitemap.static_urls]]
            url = "/extra/"
            images = [{ url = "/extra.png" }]
            "#,
        );

        assert_eq!(sitemap.output, PathBuf::from("/maps/sitemap.xml"));
        assert_eq!(sitemap.cache_time, 0);
        assert_eq!(sitemap.include, ["/blog/**"]);
        assert_eq!(sitemap.exclude, ["/blog/drafts/**"]);
        assert!(sitemap.images);

        let (key, meta) = sitemap.config.iter().next().unwrap();
        assert_eq!(key, "/blog/**");
        assert_eq!(meta.priority, Some(0.8));
        assert_eq!(meta.changefreq, Some(ChangeFreq::Weekly));
        assert_eq!(meta.lastmod, Some(Lastmod::new("2025-01-01")));

        assert_eq!(sitemap.static_urls.len(), 2);
        assert_eq!(sitemap.static_urls[0].url, "https://example.com/external/");
        assert_eq!(sitemap.static_urls[0].priority, Some(0.3));
        assert_eq!(sitemap.static_urls[1].images.as_ref().unwrap()[0].url, "/extra.png");
    }

    #[test]
    fn test_pattern_config_keeps_declaration_order() {
        let sitemap = parse(
            r#"
            [sitemap.config."/z/**"]
            priority = 0.1
            [sitemap.config."/a/**"]
            priority = 0.2
            [sitemap.config."/m"]
            priority = 0.3
            "#,
        );

        let keys: Vec<&str> = sitemap.config.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["/z/**", "/a/**", "/m"]);
    }

    #[test]
    fn test_pattern_config_inline_table_order() {
        let sitemap = parse(
            r#"
            [sitemap]
            config = { "/b" = { priority = 0.5 }, "/a" = { priority = 0.4 } }
            "#,
        );

        let keys: Vec<&str> = sitemap.config.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["/b", "/a"]);
    }

    #[test]
    fn test_unknown_changefreq_rejected() {
        let result = toml::from_str::<SiteConfig>(
            r#"
            [sitemap.config."/"]
            changefreq = "sometimes"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_meta_field_rejected() {
        let result = toml::from_str::<SiteConfig>(
            r#"
            [sitemap.config."/"]
            weight = 3
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_priority_range() {
        let sitemap = parse(
            r#"
            [sitemap.config."/"]
            priority = 1.5
            "#,
        );
        let err = sitemap.validate().unwrap_err().to_string();
        assert!(err.contains("priority"));

        let sitemap = parse(
            r#"
            [[sitemap.static_urls]]
            url = "/x/"
            priority = -0.1
            "#,
        );
        assert!(sitemap.validate().is_err());

        let sitemap = parse(
            r#"
            [sitemap.config."/"]
            priority = 1.0
            [sitemap.config."/a"]
            priority = 0.0
            "#,
        );
        assert!(sitemap.validate().is_ok());
    }

    #[test]
    fn test_validate_lastmod() {
        let sitemap = parse(
            r#"
            [sitemap.config."/"]
            lastmod = "yesterday"
            "#,
        );
        let err = sitemap.validate().unwrap_err().to_string();
        assert!(err.contains("yesterday"));

        let sitemap = parse(
            r#"
            [sitemap.config."/"]
            lastmod = "2025-02-30"
            "#,
        );
        assert!(sitemap.validate().is_err());

        let sitemap = parse(
            r#"
            [sitemap.config."/"]
            lastmod = "2025-01-01T10:00:00+08:00"
            "#,
        );
        assert!(sitemap.validate().is_ok());
    }

    #[test]
    fn test_validate_static_url_empty() {
        let sitemap = parse(
            r#"
            [[sitemap.static_urls]]
            url = ""
            "#,
        );
        assert!(sitemap.validate().is_err());
    }
}

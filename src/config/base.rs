//! `[base]` section configuration.
//!
//! Where the site is served from.

use super::defaults;
use crate::sitemap::path::{normalize, url_prefix};
use educe::Educe;
use serde::Deserialize;

/// `[base]` section in sitemap.toml - site location.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://example.com"
/// path_prefix = "/blog"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Absolute site URL. Required to generate a sitemap.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// URL path prefix for subdirectory deployment (e.g., "/blog").
    #[serde(default = "defaults::base::path_prefix")]
    #[educe(Default = defaults::base::path_prefix())]
    pub path_prefix: String,
}

impl BaseConfig {
    /// Site URL joined with the path prefix, without trailing slash.
    ///
    /// `None` when no site URL is configured.
    pub fn hostname(&self) -> Option<String> {
        let url = self.url.as_deref().filter(|url| !url.is_empty())?;
        Some(format!("{}{}", normalize(url), self.url_prefix()))
    }

    /// Path prefix as it appears in URLs: `""` for the root, else `/prefix`.
    pub fn url_prefix(&self) -> String {
        url_prefix(&self.path_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            url = "https://example.com"
            path_prefix = "/blog"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.url, Some("https://example.com".to_string()));
        assert_eq!(config.base.path_prefix, "/blog");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();

        assert_eq!(config.base.url, None);
        assert_eq!(config.base.path_prefix, "/");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            url = "https://example.com"
            title = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_hostname() {
        let mut base = BaseConfig {
            url: Some("https://example.com/".into()),
            ..BaseConfig::default()
        };
        assert_eq!(base.hostname().as_deref(), Some("https://example.com"));

        base.path_prefix = "/blog/".into();
        assert_eq!(base.hostname().as_deref(), Some("https://example.com/blog"));

        base.path_prefix = "blog".into();
        assert_eq!(base.hostname().as_deref(), Some("https://example.com/blog"));
    }

    #[test]
    fn test_hostname_missing_url() {
        assert_eq!(BaseConfig::default().hostname(), None);

        let base = BaseConfig {
            url: Some(String::new()),
            ..BaseConfig::default()
        };
        assert_eq!(base.hostname(), None);
    }
}

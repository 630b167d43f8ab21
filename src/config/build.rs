//! `[build]` section configuration.
//!
//! Locations of the build pipeline's output this step reads and writes.

use super::defaults;
use educe::Educe;
use serde::Deserialize;
use std::path::PathBuf;

/// `[build]` section in sitemap.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"              # Build output directory
/// pages = "public/.pages.json"   # Page manifest
/// minify = true                  # Minify sitemap XML
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Build output directory. The sitemap is written below it.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Page manifest written by the build.
    #[serde(default = "defaults::build::pages")]
    #[educe(Default = defaults::build::pages())]
    pub pages: PathBuf,

    /// Strip whitespace between XML tags.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.root, None);
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.pages, PathBuf::from("public/.pages.json"));
        assert!(config.build.minify);
    }

    #[test]
    fn test_build_config_custom() {
        let config = r#"
            [build]
            output = "dist"
            pages = "dist/pages.json"
            minify = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.pages, PathBuf::from("dist/pages.json"));
        assert!(!config.build.minify);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            content = "content"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}

//! Per-pattern metadata resolution.
//!
//! Rules are checked in declaration order and the **first** matching rule
//! wins, even when a later rule is more specific:
//!
//! ```toml
//! [sitemap.config."/blog/**"]        # matches /blog/featured/x first
//! priority = 0.5
//!
//! [sitemap.config."/blog/featured/**"] # never reached for /blog/featured/x
//! priority = 0.9
//! ```
//!
//! Declare specific patterns before general ones.

use super::{SitemapError, entry::UrlMeta, path::normalize, pattern::PatternSet};
use crate::config::PatternConfig;

/// Metadata for paths no rule matches.
static NO_META: UrlMeta = UrlMeta::EMPTY;

/// A compiled `[sitemap.config]` entry.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Normalized pattern
    pub pattern: String,
    /// Key as written in the config
    pub key: String,
    pub meta: UrlMeta,
    matcher: PatternSet,
}

/// Ordered rule table, built once per run.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<PatternRule>,
}

impl RuleTable {
    pub fn new(config: &PatternConfig) -> Result<Self, SitemapError> {
        let rules = config
            .iter()
            .map(|(key, meta)| -> Result<PatternRule, SitemapError> {
                let pattern = normalize(key).to_owned();
                Ok(PatternRule {
                    matcher: PatternSet::new([pattern.as_str()])?,
                    pattern,
                    key: key.clone(),
                    meta: meta.clone(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { rules })
    }

    /// First rule whose pattern matches `path`.
    pub fn find(&self, path: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|rule| rule.matcher.is_match(path))
    }

    /// Metadata for `path`, empty when no rule matches.
    pub fn resolve(&self, path: &str) -> &UrlMeta {
        self.find(path).map_or(&NO_META, |rule| &rule.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::entry::ChangeFreq;

    fn meta(priority: f32) -> UrlMeta {
        UrlMeta {
            priority: Some(priority),
            ..UrlMeta::default()
        }
    }

    fn table(rules: &[(&str, UrlMeta)]) -> RuleTable {
        let config: PatternConfig = rules
            .iter()
            .map(|(key, meta)| (key.to_string(), meta.clone()))
            .collect();
        RuleTable::new(&config).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let rules = table(&[("/blog/**", meta(0.5)), ("/blog/featured/**", meta(0.9))]);

        assert_eq!(rules.resolve("/blog/featured/x").priority, Some(0.5));
        assert_eq!(rules.find("/blog/featured/x").unwrap().key, "/blog/**");
    }

    #[test]
    fn test_declaration_order_decides() {
        let rules = table(&[("/blog/featured/**", meta(0.9)), ("/blog/**", meta(0.5))]);

        assert_eq!(rules.resolve("/blog/featured/x").priority, Some(0.9));
        assert_eq!(rules.resolve("/blog/other").priority, Some(0.5));
    }

    #[test]
    fn test_no_match_is_empty() {
        let rules = table(&[("/blog/**", meta(0.5))]);
        assert_eq!(rules.resolve("/about"), &UrlMeta::EMPTY);
        assert!(RuleTable::default().resolve("/").priority.is_none());
    }

    #[test]
    fn test_keys_are_normalized() {
        let rules = table(&[(
            "/about/",
            UrlMeta {
                changefreq: Some(ChangeFreq::Yearly),
                ..UrlMeta::default()
            },
        )]);

        let rule = rules.find("/about").unwrap();
        assert_eq!(rule.pattern, "/about");
        assert_eq!(rule.key, "/about/");
        assert_eq!(rule.meta.changefreq, Some(ChangeFreq::Yearly));
    }

    #[test]
    fn test_root_key() {
        let rules = table(&[("/", meta(1.0))]);
        assert_eq!(rules.resolve("/").priority, Some(1.0));
        assert_eq!(rules.resolve("/about").priority, None);
    }

    #[test]
    fn test_invalid_key_fails() {
        let config: PatternConfig = [("/[bad".to_string(), UrlMeta::default())]
            .into_iter()
            .collect();
        assert!(RuleTable::new(&config).is_err());
    }
}

//! Page selection.
//!
//! A page is listed when it is static, matches the include patterns (if
//! any), and matches no exclude pattern. `/404` is always excluded.

use super::{SitemapError, path::normalize, pattern::PatternSet};
use crate::page::Page;

/// Path that never appears in a sitemap.
pub const NOT_FOUND_PATH: &str = "/404";

/// Include/exclude filter over page paths.
#[derive(Debug, Clone)]
pub struct PageFilter {
    include: PatternSet,
    exclude: PatternSet,
}

impl PageFilter {
    /// Build a filter from configured patterns.
    ///
    /// Patterns are normalized first, so `/drafts/` and `/drafts` are the
    /// same pattern.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, SitemapError> {
        let include = PatternSet::new(include.iter().map(|p| normalize(p)))?;
        let exclude = PatternSet::new(
            exclude
                .iter()
                .map(|p| normalize(p))
                .chain(std::iter::once(NOT_FOUND_PATH)),
        )?;

        Ok(Self { include, exclude })
    }

    /// Whether a page belongs in the sitemap.
    ///
    /// Exclusion is checked after inclusion and wins.
    pub fn accepts(&self, page: &Page) -> bool {
        page.is_static()
            && (self.include.is_empty() || self.include.is_match(&page.path))
            && !self.exclude.is_match(&page.path)
    }

    /// Filter pages, preserving their order.
    pub fn select<'a>(&self, pages: &'a [Page]) -> Vec<&'a Page> {
        pages.iter().filter(|page| self.accepts(page)).collect()
    }
}

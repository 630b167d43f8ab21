//! Glob matching over page paths.
//!
//! Patterns follow the usual path-glob rules:
//!
//! | Pattern        | Matches                                  |
//! |----------------|------------------------------------------|
//! | `/blog/*`      | `/blog/a` (not `/blog/a/b`)              |
//! | `/blog/**`     | `/blog`, `/blog/a`, `/blog/a/b`          |
//! | `/{a,b}`       | `/a`, `/b`                               |
//! | `/post-[0-9]`  | `/post-1`                                |
//!
//! `*` never crosses a `/`. A trailing `/**` also matches the directory
//! path itself, so `/blog/**` covers the `/blog` index page.
//!
//! This is not micromatch: a leading `!` is a literal character rather than
//! a negation (use `exclude` instead), and `*` also matches segments that
//! start with a dot (`/*` matches `/.well-known`).

use super::{SitemapError, path::normalize};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// A compiled set of glob patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: GlobSet,
}

impl PatternSet {
    /// Compile patterns, failing on the first malformed one.
    pub fn new<I, S>(patterns: I) -> Result<Self, SitemapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(compile(pattern)?);
            if let Some(dir) = pattern.strip_suffix("/**") {
                builder.add(compile(normalize(dir))?);
            }
            kept.push(pattern.to_owned());
        }

        let set = builder.build().map_err(|source| SitemapError::Pattern {
            pattern: kept.join(", "),
            source,
        })?;

        Ok(Self { set })
    }

    /// Check whether any pattern matches `path`.
    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

fn compile(pattern: &str) -> Result<globset::Glob, SitemapError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| SitemapError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })
}

//! Sitemap post-build step for tola sites.
//!
//! Reads the page manifest written by a site build, selects the pages to
//! list, attaches per-pattern metadata and page images, and writes
//! `sitemap.xml` into the build output.

pub mod cli;
pub mod config;
pub mod logger;
pub mod page;
pub mod sitemap;
pub mod utils;

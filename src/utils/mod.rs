//! Utility modules shared by the config layer and the sitemap pipeline.

pub mod date;
pub mod minify;

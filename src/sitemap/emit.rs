//! Sitemap serialization.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!     <image:image>
//!       <image:loc>https://example.com/cover.png</image:loc>
//!     </image:image>
//!   </url>
//! </urlset>
//! ```

use super::{SitemapError, entry::UrlEntry};
use crate::utils::minify::minify_xml;
use quick_xml::escape::escape;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
/// XML namespace for the image extension
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Everything an emitter needs to produce the document.
#[derive(Debug, Clone, Copy)]
pub struct SitemapDocument<'a> {
    /// Site URL including the path prefix, without trailing slash
    pub hostname: &'a str,
    /// Cache directive in milliseconds, for emitters that memoize output
    pub cache_time: u64,
    /// Derived entries followed by static entries
    pub urls: &'a [UrlEntry],
}

/// Serializes a sitemap document.
pub trait SitemapEmitter: Sync {
    fn emit(&self, document: &SitemapDocument<'_>) -> Result<String, SitemapError>;
}

/// sitemaps.org XML emitter with image extension support.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEmitter {
    pub minify: bool,
}

impl XmlEmitter {
    pub const fn new(minify: bool) -> Self {
        Self { minify }
    }

    fn render(document: &SitemapDocument<'_>) -> String {
        let mut xml = String::with_capacity(256 + document.urls.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<urlset xmlns="{SITEMAP_NS}" xmlns:image="{IMAGE_NS}">"#
        ));
        xml.push('\n');

        for entry in document.urls {
            let loc = absolute_url(document.hostname, &entry.url);
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape(loc.as_str())));

            if let Some(lastmod) = &entry.lastmod {
                let value = lastmod
                    .parse()
                    .map_or_else(|| lastmod.to_string(), |dt| dt.to_ymd());
                xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape(value.as_str())));
            }
            if let Some(changefreq) = entry.changefreq {
                xml.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq.as_str()));
            }
            if let Some(priority) = entry.priority {
                xml.push_str(&format!("    <priority>{priority}</priority>\n"));
            }
            for image in entry.images.iter().flatten() {
                let loc = absolute_url(document.hostname, &image.url);
                xml.push_str("    <image:image>\n");
                xml.push_str(&format!("      <image:loc>{}</image:loc>\n", escape(loc.as_str())));
                xml.push_str("    </image:image>\n");
            }

            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

impl SitemapEmitter for XmlEmitter {
    fn emit(&self, document: &SitemapDocument<'_>) -> Result<String, SitemapError> {
        let xml = Self::render(document);
        Ok(minify_xml(&xml, self.minify).into_owned())
    }
}

/// Resolve `url` against the site hostname.
///
/// URLs that start with a scheme (`https://...`) are kept as-is.
pub fn absolute_url(hostname: &str, url: &str) -> String {
    if has_scheme(url) {
        return url.to_owned();
    }
    format!(
        "{}/{}",
        hostname.trim_end_matches('/'),
        url.trim_start_matches('/')
    )
}

/// `scheme://` prefix, where the scheme is a letter followed by letters,
/// digits, `+`, `-` or `.`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

//! XML minification.

use std::borrow::Cow;

/// Minify XML by removing indentation and line breaks between elements.
///
/// Returns `Cow::Borrowed` if minify is disabled.
pub fn minify_xml(xml: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(xml);
    }

    Cow::Owned(
        xml.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = r#"<?xml version="1.0"?>
<root>
  <item>Hello</item>
</root>"#;
        assert_eq!(
            minify_xml(xml, true),
            r#"<?xml version="1.0"?><root><item>Hello</item></root>"#
        );
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        let xml = "<root>\n\n  <item/>\n\n</root>";
        assert_eq!(minify_xml(xml, true), "<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = "<root>\n  <item/>\n</root>";
        let result = minify_xml(xml, false);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, xml);
    }

    #[test]
    fn test_minify_xml_sitemap_like() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/</loc>
    <lastmod>2025-01-01</lastmod>
  </url>
</urlset>"#;
        let result = minify_xml(xml, true);

        assert!(!result.contains('\n'));
        assert!(!result.contains("  "));
        assert!(result.contains("<loc>https://example.com/</loc>"));
        assert!(result.contains("<lastmod>2025-01-01</lastmod>"));
    }
}

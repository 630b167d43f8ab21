//! Path normalization for pattern and URL comparison.
//!
//! | Input        | `normalize` | `with_trailing_slash` | `url_prefix` |
//! |--------------|-------------|-----------------------|--------------|
//! | `/`          | `/`         | `/`                   | ``           |
//! | `/about//`   | `/about`    | `/about/`             | `/about`     |
//! | `blog/`      | `blog`      | `blog/`               | `/blog`      |
//! | ``           | `/`         | `/`                   | ``           |

/// Strip trailing slashes; an empty result becomes `/`.
///
/// Idempotent: `normalize(normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Append `/`, collapsing any run of trailing slashes to exactly one.
pub fn with_trailing_slash(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

/// Canonical site path prefix: empty for the site root, otherwise a single
/// leading slash and no trailing slash (`blog/` → `/blog`).
pub fn url_prefix(prefix: &str) -> String {
    match prefix.trim_matches('/') {
        "" => String::new(),
        trimmed => format!("/{trimmed}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize("/about/"), "/about");
        assert_eq!(normalize("/about///"), "/about");
        assert_eq!(normalize("/blog/**/"), "/blog/**");
        assert_eq!(normalize("/about"), "/about");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize(""), "/");
    }

    #[test]
    fn test_normalize_idempotent() {
        for path in ["", "/", "//", "/a", "/a/", "/a//b//", "a/b/", "/404"] {
            let once = normalize(path);
            assert_eq!(normalize(once), once, "not idempotent for {path:?}");
            assert!(once == "/" || !once.ends_with('/'));
        }
    }

    #[test]
    fn test_with_trailing_slash() {
        assert_eq!(with_trailing_slash("/about"), "/about/");
        assert_eq!(with_trailing_slash("/about//"), "/about/");
        assert_eq!(with_trailing_slash("/"), "/");
        assert_eq!(with_trailing_slash(""), "/");
    }

    #[test]
    fn test_url_prefix() {
        assert_eq!(url_prefix("/"), "");
        assert_eq!(url_prefix(""), "");
        assert_eq!(url_prefix("/blog"), "/blog");
        assert_eq!(url_prefix("/blog/"), "/blog");
        assert_eq!(url_prefix("blog"), "/blog");
        assert_eq!(url_prefix("/docs/v2/"), "/docs/v2");
    }
}

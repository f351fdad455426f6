//! URL allow-list for link and image targets.

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "data:", "vbscript:"];

const ALLOWED_PREFIXES: [&str; 6] = ["http://", "https://", "//", "/", "./", "../"];

/// Why a URL was refused. Only surfaces in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    Empty,
    BlockedScheme(&'static str),
    NotAllowListed,
}

/// Returns the trimmed URL when it is safe to place in `href` or `src`.
///
/// Only explicit `http(s)` URLs, protocol-relative URLs and explicit
/// relative paths pass. The returned slice still has to be HTML-escaped.
pub fn sanitize_url(url: &str) -> Option<&str> {
    check_url(url).ok()
}

pub(crate) fn check_url(url: &str) -> Result<&str, Rejection> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(Rejection::Empty);
    }

    if let Some(scheme) = BLOCKED_SCHEMES
        .iter()
        .find(|scheme| starts_with_ignore_case(trimmed, scheme))
    {
        return Err(Rejection::BlockedScheme(*scheme));
    }

    if ALLOWED_PREFIXES
        .iter()
        .any(|prefix| starts_with_ignore_case(trimmed, prefix))
    {
        Ok(trimmed)
    } else {
        Err(Rejection::NotAllowListed)
    }
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_web_and_relative_urls() {
        for url in [
            "http://example.com",
            "https://example.com/a?b=c",
            "HTTPS://EXAMPLE.COM",
            "//cdn.example.com/x.png",
            "/media/1",
            "./a.png",
            "../b.png",
        ] {
            assert_eq!(sanitize_url(url), Some(url), "{url} should be accepted");
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize_url("  https://x.y  "), Some("https://x.y"));
    }

    #[test]
    fn test_rejects_script_schemes_in_any_case() {
        assert_eq!(
            check_url("JavaScript:alert(1)"),
            Err(Rejection::BlockedScheme("javascript:"))
        );
        assert_eq!(
            check_url(" data:text/html;base64,PHNjcmlwdD4="),
            Err(Rejection::BlockedScheme("data:"))
        );
        assert_eq!(
            check_url("VBSCRIPT:msgbox"),
            Err(Rejection::BlockedScheme("vbscript:"))
        );
    }

    #[test]
    fn test_rejects_empty_and_unknown() {
        assert_eq!(check_url(""), Err(Rejection::Empty));
        assert_eq!(check_url(" \t "), Err(Rejection::Empty));
        assert_eq!(check_url("example.com"), Err(Rejection::NotAllowListed));
        assert_eq!(check_url("mailto:a@b.c"), Err(Rejection::NotAllowListed));
        assert_eq!(check_url("ftp://host"), Err(Rejection::NotAllowListed));
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        assert_eq!(sanitize_url("ж"), None);
        assert_eq!(sanitize_url("日本"), None);
    }
}

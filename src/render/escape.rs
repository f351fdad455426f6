/// Escapes text for both element content and quoted attribute values.
///
/// Single pass over the input, so an `&` produced for one replacement is
/// never escaped a second time.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a\"b<c>d&e'"), "a&quot;b&lt;c&gt;d&amp;e&#39;");
    }

    #[test]
    fn test_escape_html_keeps_existing_entities_visible() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_html_passes_unicode_through() {
        assert_eq!(escape_html("привет 👋"), "привет 👋");
    }
}

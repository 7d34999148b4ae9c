//! Text normalization for values embedded in structured output.
//!
//! | Function                | Applied to                                  |
//! |-------------------------|---------------------------------------------|
//! | [`clean`]               | headline, author names, section, tags       |
//! | [`sanitize_text_field`] | raw settings input before validation        |
//!
//! `clean` is idempotent: its output never contains a tag opener that a
//! second pass would strip, and the trailing trim cannot expose one.

// ============================================================================
// Public API
// ============================================================================

/// Remove `\n` / `\r`, strip markup tags and trim surrounding whitespace.
pub fn clean(value: &str) -> String {
    let unbroken: String = value.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    strip_tags(&unbroken).trim().to_owned()
}

/// Normalize a single-line settings value.
///
/// Strips tags, then collapses every whitespace run (tabs and line breaks
/// included) into a single space.
pub fn sanitize_text_field(value: &str) -> String {
    strip_tags(value)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip `<...>` markup from text.
///
/// A `<` followed by whitespace or sitting at the very end is literal text,
/// otherwise it opens a tag that runs to the next `>`. An unterminated tag
/// swallows the rest of the input.
pub fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        if c == '<' && chars.peek().is_some_and(|next| !next.is_whitespace()) {
            in_tag = true;
            continue;
        }
        result.push(c);
    }

    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_markup() {
        assert_eq!(clean("<b>Breaking</b> news"), "Breaking news");
        assert_eq!(clean("<a href=\"/x\">Link</a>"), "Link");
    }

    #[test]
    fn test_clean_removes_line_breaks() {
        assert_eq!(clean("Multi\nline\r\ntitle"), "Multilinetitle");
    }

    #[test]
    fn test_clean_trims() {
        assert_eq!(clean("   padded \t"), "padded");
    }

    #[test]
    fn test_clean_line_break_inside_tag() {
        assert_eq!(clean("a<\nbr>b"), "ab");
    }

    #[test]
    fn test_clean_literal_angle_brackets() {
        assert_eq!(clean("1 < 2 > 0"), "1 < 2 > 0");
        assert_eq!(clean("trailing <"), "trailing <");
    }

    #[test]
    fn test_clean_unterminated_tag() {
        assert_eq!(clean("title<span class="), "title");
    }

    #[test]
    fn test_clean_idempotent() {
        let samples = [
            "<p>Hello</p>\n",
            "a < ",
            "a <b> <",
            "<<b> x",
            "  <i>\r\n</i>  spaced  ",
            "< <b>x",
            "René <em>Ünïcödé</em>",
            "",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_sanitize_text_field() {
        assert_eq!(sanitize_text_field("  WP-\t<b>prefix</b>\n "), "WP- prefix");
        assert_eq!(sanitize_text_field("example.com"), "example.com");
    }
}

//! Literal scanner for `{{ key }}` placeholders.
//!
//! The key is compared byte for byte, so characters that would mean something
//! in a pattern language (`.`, `+`, `(`) only ever match themselves.
use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Find the first placeholder for `key` in `text`.
///
/// A placeholder is `{{`, any number of spaces, the key, any number of spaces, `}}`.
/// Only U+0020 counts as a space.
pub fn find(text: &str, key: &str) -> Option<Range<usize>> {
    let mut from = 0;

    while let Some(offset) = text[from..].find(OPEN) {
        let start = from + offset;
        let inner = start + OPEN.len();

        if let Some(end) = match_at(text, inner, key) {
            return Some(start..end);
        }

        // Braces may overlap, e.g. `{{{ key }}`.
        from = start + 1;
    }

    None
}

/// Match `spaces key spaces }}` at `pos`, returning the end of the closing braces.
fn match_at(text: &str, pos: usize, key: &str) -> Option<usize> {
    let leading = spaces(&text[pos..]);

    // The key itself may start with spaces, so try every split of the leading run.
    for skip in 0..=leading {
        let at = pos + skip;
        if !text[at..].starts_with(key) {
            continue;
        }

        let after = at + key.len();
        let after = after + spaces(&text[after..]);

        if text[after..].starts_with(CLOSE) {
            return Some(after + CLOSE.len());
        }
    }

    None
}

fn spaces(text: &str) -> usize {
    text.bytes().take_while(|b| *b == b' ').count()
}

/// Replace the first placeholder for `key` with `value`.
/// Returns `None` if the placeholder isn't there.
pub fn replace_first(text: &str, key: &str, value: &str) -> Option<String> {
    let range = find(text, key)?;

    let mut result = String::with_capacity(text.len() - range.len() + value.len());
    result.push_str(&text[..range.start]);
    result.push_str(value);
    result.push_str(&text[range.end..]);

    Some(result)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("{{x}}", "x"), Some(0..5));
        assert_eq!(find("a {{ x }} b", "x"), Some(2..9));
        assert_eq!(find("{{     x}}", "x"), Some(0..10));
        assert_eq!(find("{{ y }}", "x"), None);
        assert_eq!(find("{{ x }", "x"), None);
        assert_eq!(find("{ { x }}", "x"), None);
        assert_eq!(find("", "x"), None);
    }

    #[test]
    fn test_overlapping_braces() {
        assert_eq!(find("{{{ x }}", "x"), Some(1..8));
        assert_eq!(find("{{ y }}{{ x }}", "x"), Some(7..14));
    }

    #[test]
    fn test_only_spaces() {
        assert_eq!(find("{{\tx}}", "x"), None);
        assert_eq!(find("{{ x\n}}", "x"), None);
    }

    #[test]
    fn test_key_is_literal() {
        assert_eq!(find("{{ a.b }}", "a.b"), Some(0..9));
        assert_eq!(find("{{ axb }}", "a.b"), None);
        assert_eq!(find("{{ xx }}", "x+"), None);
        assert_eq!(find("{{ x+ }}", "x+"), Some(0..8));
        assert_eq!(find("{{ ( }}", "("), Some(0..7));
    }

    #[test]
    fn test_key_with_leading_space() {
        assert_eq!(find("{{   x }}", " x"), Some(0..9));
        assert_eq!(find("{{x}}", " x"), None);
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(find("é {{ clé }} ü", "clé"), Some(3..13));
        assert_eq!(
            replace_first("é {{ clé }} ü", "clé", "v"),
            Some("é v ü".to_string())
        );
    }

    #[test]
    fn test_replace_first() {
        assert_eq!(
            replace_first("{{ x }} and {{ x }}", "x", "1"),
            Some("1 and {{ x }}".to_string())
        );
        assert_eq!(replace_first("nothing here", "x", "1"), None);
    }
}

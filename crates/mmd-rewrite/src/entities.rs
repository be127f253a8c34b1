//! HTML entity decoding.
//!
//! Pandoc escapes the contents of code blocks, so diagram source arrives as
//! `A --&gt; B`. Mermaid parses the DOM text of its container verbatim and
//! does not understand entities, so they must be decoded back into literal
//! characters before the container is handed to the browser.

use std::sync::LazyLock;

use regex::Regex;

/// Matches named (`&gt;`), decimal (`&#62;`) and hex (`&#x3E;`) references.
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").expect("invalid entity regex")
});

/// Decode HTML character references into literal characters.
///
/// Decoding is single-pass: text produced by a decoded reference is never
/// re-examined, so `&amp;gt;` yields `&gt;` rather than `>`. Unknown named
/// references and out-of-range numeric references are preserved verbatim.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let body = &caps[1];
            decode_reference(body).unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

/// Decode a single reference body (the text between `&` and `;`).
fn decode_reference(body: &str) -> Option<String> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = if let Some(hex) = numeric.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            numeric.parse().ok()?
        };
        return char::from_u32(code).map(String::from);
    }
    entity_to_char(body).map(String::from)
}

/// Map a named entity to its literal character.
fn entity_to_char(name: &str) -> Option<&'static str> {
    Some(match name {
        // Predefined entities (the ones Pandoc actually emits in code blocks)
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",

        // Common typographic entities
        "nbsp" => "\u{00a0}",
        "mdash" => "\u{2014}",
        "ndash" => "\u{2013}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "hellip" => "\u{2026}",

        // Arrows
        "rarr" => "\u{2192}",
        "larr" => "\u{2190}",
        "harr" => "\u{2194}",
        "uarr" => "\u{2191}",
        "darr" => "\u{2193}",

        // Math symbols
        "le" => "\u{2264}",
        "ge" => "\u{2265}",
        "ne" => "\u{2260}",
        "plusmn" => "\u{00b1}",
        "times" => "\u{00d7}",
        "divide" => "\u{00f7}",

        // Misc symbols
        "copy" => "\u{00a9}",
        "reg" => "\u{00ae}",
        "trade" => "\u{2122}",
        "deg" => "\u{00b0}",
        "sect" => "\u{00a7}",
        "para" => "\u{00b6}",
        "middot" => "\u{00b7}",
        "laquo" => "\u{00ab}",
        "raquo" => "\u{00bb}",

        // Unknown entity - return None to preserve as-is
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode_gt() {
        assert_eq!(decode_entities("A --&gt; B"), "A --> B");
    }

    #[test]
    fn test_decode_predefined_set() {
        assert_eq!(
            decode_entities("&amp; &lt; &gt; &quot; &apos;"),
            "& < > \" '"
        );
    }

    #[test]
    fn test_decode_decimal_reference() {
        assert_eq!(decode_entities("&#62;"), ">");
    }

    #[test]
    fn test_decode_hex_reference() {
        assert_eq!(decode_entities("&#x3E;&#X3e;"), ">>");
    }

    #[test]
    fn test_decode_is_single_pass() {
        // &amp;gt; must become &gt;, not a literal >
        assert_eq!(decode_entities("&amp;gt;"), "&gt;");
    }

    #[test]
    fn test_preserve_unknown_named_reference() {
        assert_eq!(decode_entities("&notanentity;"), "&notanentity;");
    }

    #[test]
    fn test_preserve_out_of_range_numeric_reference() {
        // 0x110000 is above the Unicode code point range
        assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
    }

    #[test]
    fn test_preserve_bare_ampersand() {
        assert_eq!(decode_entities("a & b"), "a & b");
    }

    #[test]
    fn test_decode_named_typographic() {
        assert_eq!(decode_entities("a&mdash;b&nbsp;c"), "a\u{2014}b\u{00a0}c");
    }

    #[test]
    fn test_no_entities() {
        assert_eq!(decode_entities("graph TD"), "graph TD");
    }
}

//! Escaping primitive for text and attribute values.
//!
//! Exactly three reserved characters are replaced: `<` → `&lt;`, `>` → `&gt;`
//! and `&` → `&amp;`. Everything else passes through unchanged. The scan uses
//! `memchr3`, so long runs without reserved characters are copied in one
//! batch instead of character-by-character — literal text bodies in real
//! method bodies are often large and escape-free.
//!
//! [`unescape`] is the left inverse: `unescape(escape(s)) == s` for all `s`.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

use crate::{Error, Result};

/// Appends `text` to `buf`, escaping the three reserved characters.
///
/// Ein einziger Links-nach-rechts-Durchlauf; nie doppelt escaped, weil jede
/// Ersetzung genau ein Eingabezeichen konsumiert.
pub fn escape_into(buf: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        match memchr3(b'<', b'>', b'&', &bytes[start..]) {
            Some(offset) => {
                let pos = start + offset;
                if start < pos {
                    buf.push_str(&text[start..pos]);
                }
                buf.push_str(match bytes[pos] {
                    b'<' => "&lt;",
                    b'>' => "&gt;",
                    _ => "&amp;",
                });
                start = pos + 1;
            }
            None => {
                buf.push_str(&text[start..]);
                break;
            }
        }
    }
}

/// Escapes `text`, borrowing when no reserved character occurs.
pub fn escape(text: &str) -> Cow<'_, str> {
    if memchr3(b'<', b'>', b'&', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    escape_into(&mut out, text);
    Cow::Owned(out)
}

/// Resolves the three escape tokens back to their source characters.
///
/// Returns [`Error::InvalidEscape`] for an `&` that does not begin one of the
/// known tokens, and [`Error::UnclosedEscape`] when no `;` follows before the
/// input ends.
pub fn unescape(text: &str) -> Result<Cow<'_, str>> {
    let bytes = text.as_bytes();
    let Some(mut amp) = memchr(b'&', bytes) else {
        return Ok(Cow::Borrowed(text));
    };

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    loop {
        out.push_str(&text[pos..amp]);
        let rest = &text[amp..];
        let (ch, token_len) = if rest.starts_with("&lt;") {
            ('<', 4)
        } else if rest.starts_with("&gt;") {
            ('>', 4)
        } else if rest.starts_with("&amp;") {
            ('&', 5)
        } else if memchr(b';', rest.as_bytes()).is_none() {
            return Err(Error::UnclosedEscape { offset: amp });
        } else {
            return Err(Error::InvalidEscape { offset: amp });
        };
        out.push(ch);
        pos = amp + token_len;
        match memchr(b'&', &bytes[pos..]) {
            Some(rel) => amp = pos + rel,
            None => {
                out.push_str(&text[pos..]);
                break;
            }
        }
    }
    Ok(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_ampersand() {
        assert_eq!(escape("a&b"), "a&amp;b");
    }

    #[test]
    fn escape_lt_gt() {
        assert_eq!(escape("a<b>c"), "a&lt;b&gt;c");
    }

    #[test]
    fn escape_ohne_sonderzeichen_borrowed() {
        let input = "plain text with spaces";
        assert!(matches!(escape(input), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_keine_doppel_escapes() {
        // Ein bereits escapter Token wird nur an seinem '&' erneut escaped.
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escape_consecutive_reserved() {
        assert_eq!(escape("<<&>>"), "&lt;&lt;&amp;&gt;&gt;");
    }

    #[test]
    fn unescape_is_left_inverse() {
        let inputs = [
            "",
            "plain",
            "a < b && b > c",
            "&&&",
            "<>&<>&",
            "x = y < z; // Ampersand & Vergleich",
        ];
        for input in inputs {
            let encoded = escape(input);
            assert_eq!(unescape(&encoded).unwrap(), input, "input: {input:?}");
        }
    }

    #[test]
    fn unescape_unknown_token() {
        assert_eq!(
            unescape("a&quot;b").unwrap_err(),
            Error::InvalidEscape { offset: 1 }
        );
    }

    #[test]
    fn unescape_unterminated() {
        assert_eq!(
            unescape("ab&lt").unwrap_err(),
            Error::UnclosedEscape { offset: 2 }
        );
    }

    #[test]
    fn escape_into_appends() {
        let mut buf = String::from("prefix:");
        escape_into(&mut buf, "<x>");
        assert_eq!(buf, "prefix:&lt;x&gt;");
    }

    #[test]
    fn escape_large_run_single_batch() {
        // Grosser Block ohne Sonderzeichen bleibt unveraendert.
        let big = "y".repeat(64 * 1024);
        let input = format!("<{big}>");
        let expected = format!("&lt;{big}&gt;");
        assert_eq!(escape(&input), expected);
    }
}

//! Encoding-agnostic HTML entity escaping.
//!
//! [`escape_html`] narrows its input to the legacy encoding first and escapes
//! the single-byte result, so UTF-8 and Latin-1 input produce the same
//! entities for the same text.
//!
//! Escaping rules, per legacy byte:
//!
//! | Byte          | Output                                |
//! |---------------|---------------------------------------|
//! | `&` `<` `>` `"` | `&amp;` `&lt;` `&gt;` `&quot;`      |
//! | other ASCII   | itself (single quotes are left alone) |
//! | `80..=9F`     | decimal reference, e.g. `&#150;`      |
//! | `A0..=FF`     | named entity, `&nbsp;` through `&yuml;` |

use alloc::string::String;

use super::latin1::{to_legacy_with, EncodeError, Unrepresentable};

/// Named entities for the legacy bytes `0xA0..=0xFF`, in byte order.
const LATIN1_ENTITIES: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", // A0
    "uml", "copy", "ordf", "laquo", "not", "shy", "reg", "macr", // A8
    "deg", "plusmn", "sup2", "sup3", "acute", "micro", "para", "middot", // B0
    "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest", // B8
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", // C0
    "Egrave", "Eacute", "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", // C8
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocirc", "Otilde", "Ouml", "times", // D0
    "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute", "THORN", "szlig", // D8
    "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil", // E0
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", // E8
    "eth", "ntilde", "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", // F0
    "oslash", "ugrave", "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml", // F8
];

/// Entity name for a legacy byte, if it has one.
///
/// ```
/// use textcodec::text::html::entity_name;
///
/// assert_eq!(entity_name(b'&'), Some("amp"));
/// assert_eq!(entity_name(0xE9), Some("eacute"));
/// assert_eq!(entity_name(b'a'), None);
/// assert_eq!(entity_name(0x96), None);
/// ```
pub fn entity_name(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("amp"),
        b'<' => Some("lt"),
        b'>' => Some("gt"),
        b'"' => Some("quot"),
        0xA0..=0xFF => Some(LATIN1_ENTITIES[usize::from(byte - 0xA0)]),
        _ => None,
    }
}

/// Escape text as HTML entities, whatever its encoding.
///
/// Fails if the input is UTF-8 containing characters above U+00FF, which the
/// legacy encoding cannot carry. Use [`escape_html_with`] to substitute them
/// instead.
///
/// ```
/// use textcodec::escape_html;
///
/// let expected = "&lt;p&gt;Caf&eacute; &amp; cr&egrave;me&lt;/p&gt;";
/// assert_eq!(escape_html("<p>Café & crème</p>".as_bytes()).unwrap(), expected);
/// assert_eq!(escape_html(b"<p>Caf\xE9 & cr\xE8me</p>").unwrap(), expected);
/// ```
pub fn escape_html(input: &[u8]) -> Result<String, EncodeError> {
    escape_html_with(input, Unrepresentable::Reject)
}

/// Escape text as HTML entities, handling characters above U+00FF per `policy`.
pub fn escape_html_with(input: &[u8], policy: Unrepresentable) -> Result<String, EncodeError> {
    let legacy = to_legacy_with(input, policy)?;
    Ok(escape_latin1(&legacy))
}

/// Escape legacy-encoded bytes as HTML entities.
pub fn escape_latin1(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for &byte in input {
        if let Some(name) = entity_name(byte) {
            out.push('&');
            out.push_str(name);
            out.push(';');
        } else if byte < 0x80 {
            out.push(char::from(byte));
        } else {
            // C1 controls have no name.
            out.push_str("&#");
            push_decimal(&mut out, byte);
            out.push(';');
        }
    }
    out
}

fn push_decimal(out: &mut String, byte: u8) {
    let digits = [byte / 100, byte / 10 % 10, byte % 10];
    for d in digits {
        out.push(char::from(b'0' + d));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(escape_html(b"").unwrap(), "");
    }

    #[test]
    fn special_characters() {
        assert_eq!(
            escape_html(b"a < b && c > \"d\" 'e'").unwrap(),
            "a &lt; b &amp;&amp; c &gt; &quot;d&quot; 'e'"
        );
    }

    #[test]
    fn already_escaped_text_is_escaped_again() {
        assert_eq!(escape_html(b"&amp;").unwrap(), "&amp;amp;");
    }

    #[test]
    fn utf8_and_latin1_agree() {
        let utf8 = escape_html("Ærøskøbing — no".as_bytes());
        // The em dash is above U+00FF.
        assert!(utf8.is_err());

        let utf8 = escape_html("Ærøskøbing ½ ©".as_bytes()).unwrap();
        let latin1 = escape_html(b"\xC6r\xF8sk\xF8bing \xBD \xA9").unwrap();
        assert_eq!(utf8, "&AElig;r&oslash;sk&oslash;bing &frac12; &copy;");
        assert_eq!(utf8, latin1);
    }

    #[test]
    fn every_latin1_letter_has_a_name() {
        for byte in 0xA0..=0xFFu8 {
            let escaped = escape_latin1(&[byte]);
            assert!(escaped.starts_with('&') && escaped.ends_with(';'));
            assert!(!escaped.starts_with("&#"), "{}", escaped);
        }
        assert_eq!(escape_latin1(&[0xA0]), "&nbsp;");
        assert_eq!(escape_latin1(&[0xD7]), "&times;");
        assert_eq!(escape_latin1(&[0xDF]), "&szlig;");
        assert_eq!(escape_latin1(&[0xFF]), "&yuml;");
    }

    #[test]
    fn c1_controls_become_numeric_references() {
        assert_eq!(escape_latin1(&[0x80]), "&#128;");
        assert_eq!(escape_latin1(&[0x96, b'x', 0x9F]), "&#150;x&#159;");
    }

    #[test]
    fn unrepresentable_rejected_by_default() {
        let err = escape_html("<b>€</b>".as_bytes()).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Unrepresentable {
                offset: 3,
                code_point: '€'
            }
        );
    }

    #[test]
    fn unrepresentable_substituted_on_request() {
        let out = escape_html_with("<b>€5</b>".as_bytes(), Unrepresentable::Substitute(b'?'))
            .unwrap();
        assert_eq!(out, "&lt;b&gt;?5&lt;/b&gt;");
    }

    #[test]
    fn ascii_controls_pass_through() {
        assert_eq!(escape_latin1(b"a\tb\nc\x00"), "a\tb\nc\x00");
    }
}

//! UTF-8 detection with detailed error reporting.
//!
//! [`is_unicode`] answers the yes/no question "is this byte sequence UTF-8?".
//! [`validate_utf8`] answers the same question but, on failure, says where
//! and why, which is what the conversion functions and the CLI build on.
//!
//! ## Well-formed sequences
//!
//! A sequence is legal when its lead byte selects one of the rows below and
//! every following byte falls in the listed range:
//!
//! | Lead byte     | 2nd byte    | 3rd byte    | 4th byte    | Code points          |
//! |---------------|-------------|-------------|-------------|----------------------|
//! | `00..=7F`     |             |             |             | U+0000 - U+007F      |
//! | `C2..=DF`     | `80..=BF`   |             |             | U+0080 - U+07FF      |
//! | `E0`          | `A0..=BF`   | `80..=BF`   |             | U+0800 - U+0FFF      |
//! | `E1..=EC`     | `80..=BF`   | `80..=BF`   |             | U+1000 - U+CFFF      |
//! | `ED`          | `80..=9F`   | `80..=BF`   |             | U+D000 - U+D7FF      |
//! | `EE..=EF`     | `80..=BF`   | `80..=BF`   |             | U+E000 - U+FFFF      |
//! | `F0`          | `90..=BF`   | `80..=BF`   | `80..=BF`   | U+10000 - U+3FFFF    |
//! | `F1..=F3`     | `80..=BF`   | `80..=BF`   | `80..=BF`   | U+40000 - U+FFFFF    |
//! | `F4`          | `80..=8F`   | `80..=BF`   | `80..=BF`   | U+100000 - U+10FFFF  |
//!
//! The narrowed second-byte ranges are what rule out overlong forms
//! (`E0`, `F0`), surrogates (`ED`) and code points past U+10FFFF (`F4`).
//! The accepted language is exactly that of [`core::str::from_utf8`].

use alloc::string::String;

/// Error information for UTF-8 validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Error {
    /// Byte offset of the first byte that made the input invalid (0-indexed).
    pub offset: usize,
    /// The kind of UTF-8 violation.
    pub kind: Utf8ErrorKind,
}

impl Utf8Error {
    /// Resolve [`offset`](Self::offset) to a 1-indexed `(line, column)` pair
    /// within `input`. Columns count bytes, lines are split on `\n`.
    ///
    /// ```
    /// use textcodec::text::utf8::validate_utf8;
    ///
    /// let input = b"first\nsec\xFFond";
    /// let err = validate_utf8(input).unwrap_err();
    /// assert_eq!(err.line_column(input), (2, 4));
    /// ```
    pub fn line_column(&self, input: &[u8]) -> (usize, usize) {
        let before = &input[..self.offset.min(input.len())];
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        (line, self.offset - line_start + 1)
    }
}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Utf8Error {}

/// The specific type of UTF-8 violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Utf8ErrorKind {
    /// A byte that can never start a sequence (`80..=BF`, `F8..=FF`).
    InvalidLeadByte,

    /// A byte outside the legal range appeared where a continuation byte was expected.
    InvalidContinuationByte,

    /// A character was encoded using more bytes than necessary
    /// (lead `C0`/`C1`, or `E0`/`F0` followed by a too-small second byte).
    OverlongEncoding,

    /// A surrogate code point (U+D800-U+DFFF) was encoded.
    SurrogateCodepoint,

    /// A code point above U+10FFFF was encoded (lead `F5..=F7`, or `F4 90..`).
    OutOfRangeCodepoint,

    /// A multi-byte sequence was cut off by the end of input.
    TruncatedSequence,
}

impl core::fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidLeadByte => "invalid UTF-8 lead byte",
            Self::InvalidContinuationByte => "invalid UTF-8 continuation byte",
            Self::OverlongEncoding => "overlong UTF-8 encoding",
            Self::SurrogateCodepoint => "surrogate code point in UTF-8",
            Self::OutOfRangeCodepoint => "code point above U+10FFFF",
            Self::TruncatedSequence => "truncated UTF-8 sequence",
        };
        f.write_str(msg)
    }
}

/// Length of a legal sequence and the inclusive range its second byte must
/// fall in, keyed on the lead byte.
#[derive(Debug, Clone, Copy)]
struct Shape {
    len: usize,
    second_lo: u8,
    second_hi: u8,
}

impl Shape {
    const fn new(len: usize, second_lo: u8, second_hi: u8) -> Self {
        Self {
            len,
            second_lo,
            second_hi,
        }
    }
}

/// Classify a non-ASCII lead byte.
#[inline]
fn shape_of(lead: u8) -> Result<Shape, Utf8ErrorKind> {
    match lead {
        0x80..=0xBF | 0xF8..=0xFF => Err(Utf8ErrorKind::InvalidLeadByte),
        0xC0..=0xC1 => Err(Utf8ErrorKind::OverlongEncoding),
        0xC2..=0xDF => Ok(Shape::new(2, 0x80, 0xBF)),
        0xE0 => Ok(Shape::new(3, 0xA0, 0xBF)),
        0xED => Ok(Shape::new(3, 0x80, 0x9F)),
        0xE1..=0xEF => Ok(Shape::new(3, 0x80, 0xBF)),
        0xF0 => Ok(Shape::new(4, 0x90, 0xBF)),
        0xF1..=0xF3 => Ok(Shape::new(4, 0x80, 0xBF)),
        0xF4 => Ok(Shape::new(4, 0x80, 0x8F)),
        0xF5..=0xF7 => Err(Utf8ErrorKind::OutOfRangeCodepoint),
        0x00..=0x7F => Ok(Shape::new(1, 0, 0)),
    }
}

/// Explain why a continuation byte was rejected as the second byte of the
/// sequence led by `lead`.
fn second_byte_error(lead: u8, second: u8) -> Utf8ErrorKind {
    if !is_continuation_byte(second) {
        return Utf8ErrorKind::InvalidContinuationByte;
    }
    match lead {
        0xE0 | 0xF0 => Utf8ErrorKind::OverlongEncoding,
        0xED => Utf8ErrorKind::SurrogateCodepoint,
        0xF4 => Utf8ErrorKind::OutOfRangeCodepoint,
        _ => Utf8ErrorKind::InvalidContinuationByte,
    }
}

/// Returns whether `input` is entirely well-formed UTF-8.
///
/// The empty input is well-formed, and so is any pure ASCII input.
///
/// # Examples
///
/// ```
/// use textcodec::is_unicode;
///
/// assert!(is_unicode(b""));
/// assert!(is_unicode(b"plain ascii\n"));
/// assert!(is_unicode("caf\u{e9}".as_bytes()));
///
/// // Latin-1 "café": a lone 0xE9 is not UTF-8.
/// assert!(!is_unicode(b"caf\xE9"));
/// ```
#[inline]
pub fn is_unicode(input: &[u8]) -> bool {
    validate_utf8(input).is_ok()
}

/// Validate that the input is well-formed UTF-8.
///
/// Returns `Ok(())` for valid input, or the first violation otherwise.
///
/// # Examples
///
/// ```
/// use textcodec::text::utf8::{validate_utf8, Utf8ErrorKind};
///
/// assert!(validate_utf8("日本語".as_bytes()).is_ok());
///
/// // U+002F encoded on two bytes
/// let err = validate_utf8(&[b'a', 0xC0, 0xAF]).unwrap_err();
/// assert_eq!(err.offset, 1);
/// assert_eq!(err.kind, Utf8ErrorKind::OverlongEncoding);
/// ```
pub fn validate_utf8(input: &[u8]) -> Result<(), Utf8Error> {
    let len = input.len();
    let mut pos = 0;

    while pos < len {
        let lead = input[pos];
        if lead < 0x80 {
            pos += 1;
            continue;
        }

        let shape = shape_of(lead).map_err(|kind| Utf8Error { offset: pos, kind })?;

        for i in 1..shape.len {
            let Some(&byte) = input.get(pos + i) else {
                return Err(Utf8Error {
                    offset: pos,
                    kind: Utf8ErrorKind::TruncatedSequence,
                });
            };

            let legal = if i == 1 {
                (shape.second_lo..=shape.second_hi).contains(&byte)
            } else {
                is_continuation_byte(byte)
            };

            if !legal {
                let kind = if i == 1 {
                    second_byte_error(lead, byte)
                } else {
                    Utf8ErrorKind::InvalidContinuationByte
                };
                // Structural problems point at the offending byte; semantic
                // ones (overlong, surrogate, range) point at the lead.
                let offset = if kind == Utf8ErrorKind::InvalidContinuationByte {
                    pos + i
                } else {
                    pos
                };
                return Err(Utf8Error { offset, kind });
            }
        }

        pos += shape.len;
    }

    Ok(())
}

/// Check if a byte is a UTF-8 continuation byte (0x80-0xBF).
#[inline(always)]
fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Expected sequence length for a legal lead byte, 0 for bytes that can
/// never start a well-formed sequence.
#[inline]
pub fn sequence_length(lead_byte: u8) -> usize {
    shape_of(lead_byte).map_or(0, |shape| shape.len)
}

/// Decode the first code point of `input`.
///
/// Returns the code point and the number of bytes it occupied, or `None` if
/// the input is empty or does not start with a well-formed sequence.
///
/// ```
/// use textcodec::text::utf8::decode_code_point;
///
/// assert_eq!(decode_code_point(b"A"), Some(('A', 1)));
/// assert_eq!(decode_code_point("é!".as_bytes()), Some(('é', 2)));
/// assert_eq!(decode_code_point(&[0xED, 0xA0, 0x80]), None);
/// assert_eq!(decode_code_point(b""), None);
/// ```
pub fn decode_code_point(input: &[u8]) -> Option<(char, usize)> {
    let &lead = input.first()?;
    let len = sequence_length(lead);
    if len == 0 || input.len() < len {
        return None;
    }
    // Only the candidate sequence is checked, so trailing garbage is fine.
    let text = core::str::from_utf8(&input[..len]).ok()?;
    text.chars().next().map(|c| (c, len))
}

/// Encode a code point as UTF-8.
///
/// Returns `None` for surrogates and values above U+10FFFF, otherwise the
/// bytes in a fixed buffer together with the number of bytes used.
///
/// ```
/// use textcodec::text::utf8::encode_code_point;
///
/// let (buf, len) = encode_code_point(0xE9).unwrap();
/// assert_eq!(&buf[..len], "é".as_bytes());
/// assert!(encode_code_point(0xD800).is_none());
/// ```
pub fn encode_code_point(cp: u32) -> Option<([u8; 4], usize)> {
    let c = char::from_u32(cp)?;
    let mut buf = [0u8; 4];
    let len = c.encode_utf8(&mut buf).len();
    Some((buf, len))
}

/// Format a byte as a human-readable string for error messages.
pub fn format_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        alloc::format!("0x{:02X} ({:?})", byte, byte as char)
    } else {
        alloc::format!("0x{:02X}", byte)
    }
}

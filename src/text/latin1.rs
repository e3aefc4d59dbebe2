//! Conversion between UTF-8 and the single-byte legacy encoding.
//!
//! The legacy encoding maps every byte `0x00..=0xFF` to the code point of the
//! same value (ISO-8859-1). Both directions first ask [`is_unicode`] which
//! encoding the input is in, so each conversion is a no-op on input that is
//! already in the target encoding:
//!
//! - [`to_unicode`] leaves UTF-8 alone and widens anything else byte by byte;
//! - [`to_legacy`] leaves non-UTF-8 alone and narrows UTF-8 to one byte per
//!   character.
//!
//! Narrowing can fail: code points above U+00FF have no legacy byte. What
//! happens then is decided by [`Unrepresentable`]; the default rejects the
//! input with an [`EncodeError`].

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use super::utf8::is_unicode;

/// Highest code point the legacy encoding can represent.
pub const LEGACY_MAX: char = '\u{FF}';

/// Policy for characters with no single-byte representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unrepresentable {
    /// Fail with [`EncodeError::Unrepresentable`] on the first such character.
    #[default]
    Reject,
    /// Write the given byte in place of each such character.
    Substitute(u8),
}

/// Error returned when UTF-8 input cannot be narrowed to the legacy encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// `code_point` (starting at byte `offset` of the input) is above U+00FF.
    Unrepresentable { offset: usize, code_point: char },
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unrepresentable { offset, code_point } => write!(
                f,
                "code point U+{:04X} at byte {} has no single-byte encoding",
                *code_point as u32, offset
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Convert arbitrary bytes to UTF-8.
///
/// Input that is already UTF-8 is returned as-is (borrowed), so this never
/// double-encodes. Anything else is read as legacy text, one code point per
/// byte, and re-encoded. Never fails: every byte is a legacy character.
///
/// ```
/// use textcodec::to_unicode;
///
/// assert_eq!(to_unicode(b"caf\xE9").as_ref(), "café".as_bytes());
/// assert_eq!(to_unicode("café".as_bytes()).as_ref(), "café".as_bytes());
/// ```
pub fn to_unicode(input: &[u8]) -> Cow<'_, [u8]> {
    match to_unicode_str(input) {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

/// Like [`to_unicode`], typed as text.
pub fn to_unicode_str(input: &[u8]) -> Cow<'_, str> {
    if is_unicode(input) {
        if let Ok(text) = core::str::from_utf8(input) {
            return Cow::Borrowed(text);
        }
    }
    log::debug!(
        "input of {} bytes is not UTF-8, decoding as Latin-1",
        input.len()
    );
    Cow::Owned(decode_latin1(input))
}

/// Widen legacy bytes to a `String`, one char per byte.
pub fn decode_latin1(input: &[u8]) -> String {
    input.iter().map(|&b| char::from(b)).collect()
}

/// Convert arbitrary bytes to the legacy encoding, rejecting characters above
/// U+00FF.
///
/// Input that is not UTF-8 is assumed to be legacy already and is returned
/// as-is. Pure ASCII input is borrowed too, since it is identical in both
/// encodings.
///
/// ```
/// use textcodec::{to_legacy, EncodeError};
///
/// assert_eq!(to_legacy("café".as_bytes()).unwrap().as_ref(), b"caf\xE9");
/// assert_eq!(to_legacy(b"caf\xE9").unwrap().as_ref(), b"caf\xE9");
///
/// let err = to_legacy("œuf".as_bytes()).unwrap_err();
/// assert_eq!(
///     err,
///     EncodeError::Unrepresentable { offset: 0, code_point: 'œ' }
/// );
/// ```
pub fn to_legacy(input: &[u8]) -> Result<Cow<'_, [u8]>, EncodeError> {
    to_legacy_with(input, Unrepresentable::Reject)
}

/// Convert arbitrary bytes to the legacy encoding, writing `?` for
/// characters above U+00FF.
///
/// ```
/// use textcodec::text::latin1::to_legacy_lossy;
///
/// assert_eq!(to_legacy_lossy("œuf à €1".as_bytes()).as_ref(), b"?uf \xE0 ?1");
/// ```
pub fn to_legacy_lossy(input: &[u8]) -> Cow<'_, [u8]> {
    match to_legacy_with(input, Unrepresentable::Substitute(b'?')) {
        Ok(bytes) => bytes,
        // Substitution never rejects.
        Err(_) => Cow::Borrowed(input),
    }
}

/// Convert arbitrary bytes to the legacy encoding under the given policy.
pub fn to_legacy_with(
    input: &[u8],
    policy: Unrepresentable,
) -> Result<Cow<'_, [u8]>, EncodeError> {
    if !is_unicode(input) || input.is_ascii() {
        return Ok(Cow::Borrowed(input));
    }
    let Ok(text) = core::str::from_utf8(input) else {
        return Ok(Cow::Borrowed(input));
    };
    encode_latin1(text, policy).map(Cow::Owned)
}

/// Narrow text to legacy bytes under the given policy.
pub fn encode_latin1(text: &str, policy: Unrepresentable) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(text.len());
    let mut substituted = 0usize;

    for (offset, c) in text.char_indices() {
        if c <= LEGACY_MAX {
            out.push(c as u8);
            continue;
        }
        match policy {
            Unrepresentable::Reject => {
                log::debug!("U+{:04X} at byte {} is not Latin-1", c as u32, offset);
                return Err(EncodeError::Unrepresentable {
                    offset,
                    code_point: c,
                });
            }
            Unrepresentable::Substitute(byte) => {
                out.push(byte);
                substituted += 1;
            }
        }
    }

    if substituted > 0 {
        log::trace!("substituted {} unrepresentable characters", substituted);
    }
    Ok(out)
}

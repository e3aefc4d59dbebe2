//! Text encoding utilities.
//!
//! - [`utf8`] - UTF-8 detection, with byte-exact error reporting
//! - [`latin1`] - conversion between UTF-8 and the single-byte legacy encoding
//! - [`html`] - HTML entity escaping that does not care about the input encoding
//! - [`diacritics`] - folding of accented Latin letters to ASCII
//!
//! ```
//! use textcodec::text::{is_unicode, to_legacy, to_unicode};
//!
//! let legacy = b"Z\xFCrich";
//! assert!(!is_unicode(legacy));
//!
//! let utf8 = to_unicode(legacy);
//! assert_eq!(utf8.as_ref(), "Zürich".as_bytes());
//! assert_eq!(to_legacy(&utf8).unwrap().as_ref(), legacy);
//! ```

pub mod diacritics;
pub mod html;
pub mod latin1;
pub mod utf8;

// Re-export commonly used types
pub use diacritics::remove_diacritics;
pub use html::{escape_html, escape_html_with};
pub use latin1::{to_legacy, to_legacy_lossy, to_legacy_with, to_unicode, to_unicode_str};
pub use latin1::{EncodeError, Unrepresentable};
pub use utf8::{is_unicode, validate_utf8, Utf8Error, Utf8ErrorKind};

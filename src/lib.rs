//! # textcodec
//!
//! Small, encoding-agnostic string utilities for code that has to cope with
//! both UTF-8 and legacy single-byte (ISO-8859-1) text.
//!
//! ## Module Organization
//!
//! - [`text::utf8`] - UTF-8 detection and validation with error detail
//! - [`text::latin1`] - UTF-8 <-> legacy single-byte conversion
//! - [`text::html`] - HTML entity escaping for input in either encoding
//! - [`text::diacritics`] - accented Latin letters folded to ASCII
//!
//! ## Quick Start
//!
//! ```
//! use textcodec::{escape_html, is_unicode, remove_diacritics, to_legacy, to_unicode};
//!
//! // Detect the encoding
//! assert!(is_unicode("déjà".as_bytes()));
//! assert!(!is_unicode(b"d\xE9j\xE0"));
//!
//! // Convert either way; already-converted input comes back untouched
//! assert_eq!(to_unicode(b"d\xE9j\xE0").as_ref(), "déjà".as_bytes());
//! assert_eq!(to_legacy("déjà".as_bytes()).unwrap().as_ref(), b"d\xE9j\xE0");
//!
//! // Escape without caring which encoding the caller used
//! assert_eq!(escape_html(b"d\xE9j\xE0 <vu>").unwrap(), "d&eacute;j&agrave; &lt;vu&gt;");
//!
//! // Fold accents
//! assert_eq!(remove_diacritics("déjà vu"), "deja vu");
//! ```
//!
//! ## Features
//!
//! - `std` (default) - implement `std::error::Error` for the error types
//! - `serde` - serialization of [`Unrepresentable`] and [`Utf8ErrorKind`]
//! - `cli` - the `textcodec` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

/// Text encoding detection, conversion, escaping and folding.
pub mod text;

// =============================================================================
// Public re-exports
// =============================================================================

pub use text::diacritics::remove_diacritics;
pub use text::html::escape_html;
pub use text::latin1::{to_legacy, to_unicode, EncodeError, Unrepresentable};
pub use text::utf8::{is_unicode, validate_utf8, Utf8Error, Utf8ErrorKind};

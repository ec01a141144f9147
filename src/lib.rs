//! # Tidy8
//!
//! This crate is a small, table-driven UTF-8 engine. It validates,
//! decodes, encodes, and sanitizes byte sequences, and it walks them one
//! character at a time, forward as well as backward. At its heart sits a
//! deterministic finite automaton that recognizes exactly the UTF-8
//! grammar of [RFC 3629](https://www.rfc-editor.org/rfc/rfc3629): no
//! overlong encodings, no surrogates, nothing above U+10FFFF. Every
//! violation is classified (bad leading byte, overlong encoding, bad
//! continuation byte, or truncated input) at the byte offset where it was
//! detected.
//!
//!
//! ## Overview
//!
//!   * [`validate`], [`find_invalid`], and [`char_length`] answer whether
//!     a byte sequence is well-formed UTF-8, where it stops being so, and
//!     how many characters it holds.
//!   * [`decode`], [`decode_one`], [`encode`], and [`encode_one`] convert
//!     between UTF-8 bytes and [`CodePoint`]s. A [`CodePoint`] is a
//!     validated Unicode scalar value, so downstream code never re-checks
//!     range or surrogate invariants; a [`Utf8Char`] is one character's
//!     owned UTF-8 bytes.
//!   * [`sanitize`] copies arbitrary bytes into valid UTF-8, substituting
//!     one replacement character per maximal run of ill-formed input. It
//!     is the lossy path that cannot fail.
//!   * The [`cursor`] module moves a byte offset across a slice one
//!     character per step, checked or, for input validated once and
//!     iterated often, unchecked. [`CodePoints`] wraps the checked walk
//!     into a double-ended iterator.
//!   * The [`util`] module classifies individual bytes.
//!
//! The engine is stateless across calls: there is no resumable parser
//! object, only immutable tables and pure functions over the slices they
//! are handed. Callers that stream across buffer boundaries buffer the
//! trailing incomplete character themselves. All tables are read-only
//! statics, safe to share between any number of threads.
//!
//!
//! ## Example
//!
//! ```
//! use tidy8::{decode_one, sanitize, validate, ErrorKind};
//!
//! // The pound sign, well-formed.
//! assert!(validate(b"\xc2\xa3"));
//! assert_eq!(decode_one(b"\xc2\xa3")?.get(), 0xa3);
//!
//! // A truncated Hwair is diagnosed precisely...
//! let error = decode_one(b"\xf0\x90\x8d").unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::MissingByte);
//!
//! // ...and sanitizing replaces it instead of failing.
//! let mut clean = Vec::new();
//! sanitize(b"\x41\xf0\x90\x8d", &mut clean);
//! assert_eq!(clean, b"\x41\xef\xbf\xbd");
//! # Ok::<(), tidy8::Error>(())
//! ```

mod character;
mod code_point;
mod codec;
pub mod cursor;
mod dfa;
mod err;
pub mod util;

pub use character::Utf8Char;
pub use code_point::CodePoint;
pub use codec::{
    char_length, char_length_unchecked, decode, decode_one, encode, encode_one, find_invalid,
    find_leading_byte, is_char, sanitize, sanitize_with, starts_with_char, validate,
};
pub use cursor::CodePoints;
pub use err::{CodePointError, Error, ErrorKind};

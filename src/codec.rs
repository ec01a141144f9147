//! Range-level operations: validate, inspect, decode, encode, sanitize.
//!
//! Every function in this module is a thin loop over the one-character
//! primitives of the state machine. They are pure over the input slice
//! they receive and report the first problem, if any, with the byte
//! position at which it was detected.

use crate::character::Utf8Char;
use crate::code_point::CodePoint;
use crate::cursor;
use crate::dfa::{self, State};
use crate::err::{Error, ErrorKind};
use crate::util::is_leading_byte;

/// Determine whether the byte sequence is well-formed UTF-8.
///
/// # Examples
///
/// ```
/// # use tidy8::validate;
/// assert!(validate("Καλημέρα".as_bytes()));
/// assert!(!validate(b"\xed\xa0\x80")); // a surrogate
/// ```
pub fn validate(bytes: &[u8]) -> bool {
    find_invalid(bytes).is_none()
}

/// Find the first ill-formed character.
///
/// This function returns the offset at which the offending character
/// begins, so the input up to that offset is always well-formed. It
/// returns `None` when the whole input is.
///
/// # Examples
///
/// ```
/// # use tidy8::find_invalid;
/// assert_eq!(find_invalid(b"\x41\xc2\xa3\x80"), Some(3));
/// assert_eq!(find_invalid(b"\x41\xc2\xa3"), None);
/// ```
pub fn find_invalid(bytes: &[u8]) -> Option<usize> {
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        if dfa::advance_forward_once(bytes, &mut pos) != State::Accept {
            return Some(start);
        }
    }

    None
}

/// Find the first byte that can begin a character, i.e., the first byte
/// that is ASCII or a valid multi-byte leading byte.
///
/// This function performs no validation beyond looking at each byte in
/// isolation. [`sanitize`] uses it to resynchronize after an error.
pub fn find_leading_byte(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|byte| is_leading_byte(*byte))
}

/// Count the characters of the byte sequence, up to but not including the
/// first NUL byte or the end of the input, whichever comes first.
///
/// The count stops at NUL so that zero-terminated buffers measure their
/// content, not their terminator. A NUL-free slice is counted in full.
///
/// # Examples
///
/// ```
/// # use tidy8::char_length;
/// assert_eq!(char_length("héllo".as_bytes()), Ok(5));
/// assert_eq!(char_length(b"h\xc3\xa9llo\0junk"), Ok(5));
/// ```
pub fn char_length(bytes: &[u8]) -> Result<usize, Error> {
    let mut length = 0;
    let mut pos = 0;

    while pos < bytes.len() && bytes[pos] != 0 {
        let state = dfa::advance_forward_once(bytes, &mut pos);
        if state != State::Accept {
            return Err(dfa::forward_error(state, pos));
        }
        length += 1;
    }

    Ok(length)
}

/// Count the characters of the byte sequence without validating it, up to
/// but not including the first NUL byte or the end of the input.
///
/// # Safety
///
/// The input must be well-formed UTF-8. On anything else the widths read
/// off the leading bytes disagree with reality and the result is
/// meaningless; the count may also cover bytes past a malformed character.
pub unsafe fn char_length_unchecked(bytes: &[u8]) -> usize {
    let mut length = 0;
    let mut pos = 0;

    while pos < bytes.len() && bytes[pos] != 0 {
        // SAFETY: passed through from this function's contract.
        pos = unsafe { cursor::unchecked::next(bytes, pos) };
        length += 1;
    }

    length
}

/// Determine whether the byte sequence is exactly one well-formed
/// character, no more and no less.
pub fn is_char(bytes: &[u8]) -> bool {
    decode_one(bytes).is_ok()
}

/// Determine whether the byte sequence begins with a well-formed
/// character. Empty input does not.
pub fn starts_with_char(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }

    let mut pos = 0;
    dfa::advance_forward_once(bytes, &mut pos) == State::Accept
}

/// Decode a byte sequence containing exactly one character.
///
/// Beyond the four malformed-input errors, this function fails with
/// [`TrailingBytes`](ErrorKind::TrailingBytes) if input remains after one
/// complete character, and with [`MissingByte`](ErrorKind::MissingByte) on
/// empty input.
///
/// # Examples
///
/// ```
/// # use tidy8::{decode_one, ErrorKind};
/// assert_eq!(decode_one(b"\xed\x95\x9c")?.get(), 0xd55c);
/// assert_eq!(
///     decode_one(b"\xed\x95\x9c\x21").unwrap_err().kind(),
///     ErrorKind::TrailingBytes,
/// );
/// # Ok::<(), tidy8::Error>(())
/// ```
pub fn decode_one(bytes: &[u8]) -> Result<CodePoint, Error> {
    if bytes.is_empty() {
        return Err(Error::new(ErrorKind::MissingByte, 0));
    }

    let mut pos = 0;
    let (state, value) = dfa::decode_forward_once(bytes, &mut pos);
    if state != State::Accept {
        return Err(dfa::forward_error(state, pos));
    }
    if pos != bytes.len() {
        return Err(Error::new(ErrorKind::TrailingBytes, pos));
    }

    // SAFETY: the machine only accepts scalar values.
    Ok(unsafe { CodePoint::new_unchecked(value) })
}

/// Decode the byte sequence, appending one code point per character to
/// the sink.
///
/// Decoding stops at the first ill-formed character or at the end of the
/// input. The return value is the number of bytes consumed: it equals
/// `bytes.len()` exactly if the whole input was decoded, and otherwise is
/// the offset at which the offending character begins.
pub fn decode(bytes: &[u8], sink: &mut Vec<CodePoint>) -> usize {
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let (state, value) = dfa::decode_forward_once(bytes, &mut pos);
        if state != State::Accept {
            return start;
        }
        // SAFETY: the machine only accepts scalar values.
        sink.push(unsafe { CodePoint::new_unchecked(value) });
    }

    pos
}

/// Encode the code point, appending its one to four bytes to the sink.
pub fn encode_one(code_point: CodePoint, sink: &mut Vec<u8>) {
    sink.extend_from_slice(Utf8Char::new(code_point).as_bytes());
}

/// Encode the code points in order, appending their bytes to the sink.
pub fn encode(code_points: &[CodePoint], sink: &mut Vec<u8>) {
    for code_point in code_points {
        encode_one(*code_point, sink);
    }
}

/// Copy the byte sequence to the sink, replacing ill-formed input with
/// the Unicode replacement character U+FFFD.
///
/// See [`sanitize_with`] for the exact replacement rule.
pub fn sanitize(bytes: &[u8], sink: &mut Vec<u8>) {
    sanitize_with(bytes, sink, CodePoint::REPLACEMENT_CHARACTER);
}

/// Copy the byte sequence to the sink, replacing ill-formed input with
/// the given code point.
///
/// Each maximal run of ill-formed input becomes exactly one replacement:
/// after a failed read, the input is skipped up to the next byte that can
/// begin a character. Well-formed characters are copied through
/// unchanged, so sanitizing already-valid input reproduces it exactly,
/// and the output is valid UTF-8 for every input. This operation cannot
/// fail.
///
/// One sharp corner of the resynchronization rule: a failed multi-byte
/// read consumes the byte that tripped it, so a well-formed character in
/// that position (say, the `A` in `E0 A0 41`) is folded into the
/// replaced span rather than copied.
///
/// # Examples
///
/// ```
/// # use tidy8::{sanitize_with, CodePoint};
/// let mut sink = Vec::new();
/// sanitize_with(b"na\x80\x81ve", &mut sink, CodePoint::from('ï'));
/// assert_eq!(sink, "naïve".as_bytes());
/// ```
pub fn sanitize_with(bytes: &[u8], sink: &mut Vec<u8>, replacement: CodePoint) {
    let replacement = Utf8Char::new(replacement);
    let mut scratch = Vec::with_capacity(4);
    let mut pos = 0;

    while pos < bytes.len() {
        let state = dfa::copy_forward_once(bytes, &mut pos, &mut scratch);

        if state == State::Accept {
            sink.extend_from_slice(&scratch);
        } else {
            sink.extend_from_slice(replacement.as_bytes());

            // Find the start of the next possible character.
            pos += match find_leading_byte(&bytes[pos..]) {
                Some(index) => index,
                None => bytes.len() - pos,
            };
        }

        scratch.clear();
    }
}

// ================================================================================================

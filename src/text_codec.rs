//! Conversion between arbitrary bytes and printable text.
//!
//! Text uses the standard base64 alphabet (`A-Z a-z 0-9 + /`), with `=` padding so that encoded
//! text is always a multiple of four characters long.
//!
//! Decoding comes in two flavours.  [`decode`] is *lenient*: it reads symbols until it hits the
//! first `=` or the first character outside the alphabet, and silently ignores everything from
//! there on.  A trailing group of `i` symbols yields `i - 1` bytes.  This is what
//! [`decrypt`](crate::decrypt) uses, and it never fails.  If you'd rather know that the text you
//! were handed was mangled, [`decode_strict`] rejects anything that isn't canonical, padded
//! base64.
//!
//! ```rust
//! use aes_envelope::text_codec;
//!
//! assert_eq!("Zm9vYg==", text_codec::encode(b"foob"));
//! assert_eq!(b"foob".to_vec(), text_codec::decode("Zm9vYg=="));
//!
//! // Everything after the first non-alphabet character is ignored
//! assert_eq!(b"foo".to_vec(), text_codec::decode("Zm9v!!not base64!!"));
//! assert!(text_codec::decode_strict("Zm9v!!not base64!!").is_err());
//! ```
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::Error;

/// Encode bytes as padded base64 text.  Output is `ceil(n / 3) * 4` characters long.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
	STANDARD.encode(bytes)
}

/// Decode text leniently, stopping at the first `=` or non-alphabet character.
pub fn decode(text: impl AsRef<str>) -> Vec<u8> {
	let sextets: Vec<u8> = text.as_ref().bytes().map_while(sextet).collect();

	let mut bytes = Vec::with_capacity(sextets.len() / 4 * 3 + 2);

	for group in sextets.chunks(4) {
		let mut s = [0u8; 4];
		s[..group.len()].copy_from_slice(group);

		let triple = [s[0] << 2 | s[1] >> 4, s[1] << 4 | s[2] >> 2, s[2] << 6 | s[3]];

		bytes.extend_from_slice(&triple[..group.len() - 1]);
	}

	bytes
}

/// Decode text that must be canonical, padded base64 and nothing else.
///
/// # Errors
///
/// Will return [`Error::InvalidEncoding`] if the text contains characters outside the alphabet,
/// is missing its padding, or has padding or trailing bits where it shouldn't.
pub fn decode_strict(text: impl AsRef<str>) -> Result<Vec<u8>, Error> {
	STANDARD
		.decode(text.as_ref())
		.map_err(|e| Error::invalid_encoding(e.to_string()))
}

fn sextet(c: u8) -> Option<u8> {
	match c {
		b'A'..=b'Z' => Some(c - b'A'),
		b'a'..=b'z' => Some(c - b'a' + 26),
		b'0'..=b'9' => Some(c - b'0' + 52),
		b'+' => Some(62),
		b'/' => Some(63),
		_ => None,
	}
}

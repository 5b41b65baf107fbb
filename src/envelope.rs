use super::{Error, NONCE_LEN, text_codec};

/// An encrypted message: the nonce it was encrypted with, followed by the CBC ciphertext.
///
/// In byte form an [`Envelope`] is simply `nonce || ciphertext`.  There's no version tag,
/// algorithm identifier, length prefix, or integrity check; both ends need to agree on the
/// algorithm (AES-256-CBC, PKCS#7 padding) and the key ahead of time.  The text form is the byte
/// form run through [`text_codec::encode`].
///
/// You only need to deal with [`Envelope`]s directly if you're using
/// [`EnvelopeCipher::seal`](super::EnvelopeCipher::seal) and
/// [`EnvelopeCipher::open`](super::EnvelopeCipher::open) to do your own framing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
	nonce: [u8; NONCE_LEN],
	ciphertext: Vec<u8>,
}

impl Envelope {
	pub(crate) fn new(nonce: [u8; NONCE_LEN], ciphertext: Vec<u8>) -> Self {
		Self { nonce, ciphertext }
	}

	/// The nonce (CBC IV) this envelope was encrypted with.
	pub fn nonce(&self) -> &[u8; NONCE_LEN] {
		&self.nonce
	}

	/// The padded CBC ciphertext, always a whole number of blocks for a genuine envelope.
	pub fn ciphertext(&self) -> &[u8] {
		&self.ciphertext
	}

	/// The byte form of the envelope, `nonce || ciphertext`.
	///
	/// ```rust
	/// use aes_envelope::{Envelope, EnvelopeCipher, Key, NONCE_LEN};
	/// # fn main() -> Result<(), aes_envelope::Error> {
	///
	/// let envelope = EnvelopeCipher::new().seal(b"hi", &Key::from([1u8; 32]))?;
	/// let bytes = envelope.to_bytes();
	///
	/// assert_eq!(&bytes[..NONCE_LEN], envelope.nonce());
	/// assert_eq!(&bytes[NONCE_LEN..], envelope.ciphertext());
	/// assert_eq!(envelope, Envelope::from_text(envelope.to_text())?);
	/// # Ok(())
	/// # }
	/// ```
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut v = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());

		v.extend_from_slice(&self.nonce);
		v.extend_from_slice(&self.ciphertext);

		tracing::trace!(
			nonce = self
				.nonce
				.iter()
				.map(|i| format!("{i:02x}"))
				.collect::<Vec<_>>()
				.join(""),
			ct_len = self.ciphertext.len(),
			"Assembled envelope"
		);

		v
	}

	/// The text form of the envelope, as produced by
	/// [`EnvelopeCipher::encrypt`](super::EnvelopeCipher::encrypt).
	pub fn to_text(&self) -> String {
		text_codec::encode(self.to_bytes())
	}

	/// Parse the text form of an envelope.
	///
	/// Decoding is lenient (see [`text_codec::decode`]); anything after the first character that
	/// isn't part of the encoding is ignored.
	///
	/// # Errors
	///
	/// Will return [`Error::MalformedEnvelope`] if the decoded text is too short to even hold a
	/// nonce.
	pub fn from_text(text: impl AsRef<str>) -> Result<Self, Error> {
		Self::try_from(&text_codec::decode(text)[..])
	}
}

impl TryFrom<&[u8]> for Envelope {
	type Error = Error;

	fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
		let Some((nonce, ciphertext)) = b.split_first_chunk::<NONCE_LEN>() else {
			tracing::debug!(len = b.len(), "Envelope too short");
			return Err(Error::malformed_envelope(b.len()));
		};

		Ok(Self::new(*nonce, ciphertext.to_vec()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_nonce_from_ciphertext() {
		let bytes: Vec<u8> = (0u8..40).collect();
		let envelope = Envelope::try_from(&bytes[..]).unwrap();

		assert_eq!(&bytes[..NONCE_LEN], envelope.nonce());
		assert_eq!(&bytes[NONCE_LEN..], envelope.ciphertext());
		assert_eq!(bytes, envelope.to_bytes());
	}

	#[test]
	fn nonce_only_is_not_malformed() {
		let envelope = Envelope::try_from(&[7u8; NONCE_LEN][..]).unwrap();

		assert!(envelope.ciphertext().is_empty());
	}

	#[test]
	fn too_short_is_malformed() {
		for len in 0..NONCE_LEN {
			let bytes = vec![0u8; len];

			assert!(matches!(
				Envelope::try_from(&bytes[..]),
				Err(Error::MalformedEnvelope { actual }) if actual == len
			));
		}
	}

	#[test]
	fn text_form() {
		let envelope = Envelope::new([0xffu8; NONCE_LEN], vec![0u8; 16]);
		let text = envelope.to_text();

		assert_eq!(44, text.len());
		assert!(text.ends_with('='));
		assert_eq!(envelope, Envelope::from_text(&text).unwrap());
	}

	#[test]
	fn short_text_is_malformed() {
		for text in ["", "AAAA", "////////////////////", "AAAAAAAAAAAAAAAAAAAA!AAAAAAAAAA"] {
			assert!(
				matches!(
					Envelope::from_text(text),
					Err(Error::MalformedEnvelope { .. })
				),
				"{text:?} was accepted"
			);
		}
	}
}

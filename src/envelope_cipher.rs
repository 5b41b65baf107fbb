use super::{Envelope, Error, Key, NonceSource, OsNonceSource, aes_cbc, key_id};

/// Encrypts and decrypts data under a caller-supplied 256-bit key.
///
/// Encryption draws a fresh random nonce, encrypts the plaintext with AES-256 in CBC mode (with
/// PKCS#7 padding), glues the nonce onto the front of the ciphertext, and hands the whole lot
/// back as printable text.  Decryption does the reverse.  You never have to think about IVs,
/// padding, or how to get binary data through a text-only channel.
///
/// An [`EnvelopeCipher`] holds no keys and no state between calls, so one can be shared freely
/// between threads.  If you don't need to customise anything, the crate-level [`encrypt`] and
/// [`decrypt`] functions do exactly the same job.
///
/// **Note**: this provides confidentiality *only*.  There is no authentication tag, so while a
/// wrong key or a mangled ciphertext will *usually* be caught by the padding check, it is not
/// guaranteed, and an attacker who can modify ciphertexts can make predictable changes to the
/// decrypted plaintext.  If that matters to you (and it often does), you want an authenticated
/// encryption scheme.
///
/// # Example
///
/// ```rust
/// use aes_envelope::{EnvelopeCipher, Error};
/// # fn main() -> Result<(), Error> {
///
/// let cipher = EnvelopeCipher::new();
/// let key = [0x42u8; 32];
///
/// let text = cipher.encrypt(b"Hello, world!", key)?;
///
/// // Same key, same plaintext
/// assert_eq!(b"Hello, world!".to_vec(), cipher.decrypt(&text, key)?);
///
/// // Encrypting again gives a different result, thanks to the fresh nonce
/// assert_ne!(text, cipher.encrypt(b"Hello, world!", key)?);
///
/// // Keys have to be 256 bits
/// assert!(matches!(
///     cipher.encrypt(b"Hello, world!", b"too short"),
///     Err(Error::KeyLength { actual: 9 })
/// ));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvelopeCipher<R = OsNonceSource> {
	nonces: R,
}

impl EnvelopeCipher {
	/// Create a new [`EnvelopeCipher`] that gets its nonces from the operating system.
	pub fn new() -> Self {
		Self::default()
	}
}

impl<R: NonceSource> EnvelopeCipher<R> {
	/// Create an [`EnvelopeCipher`] that gets its nonces from somewhere special.
	///
	/// Read the warnings on [`NonceSource`] before doing this.
	pub fn with_nonce_source(nonces: R) -> Self {
		Self { nonces }
	}

	/// Encrypt `plaintext` under `key`, and return the result as an [`Envelope`].
	///
	/// # Errors
	///
	/// Will return [`Error::RandomSource`] if a nonce could not be generated, or
	/// [`Error::CipherEngine`] in the (should-never-happen) event that the cipher refuses to
	/// play along.
	#[tracing::instrument(level = "debug", skip(self, plaintext, key))]
	pub fn seal(&self, plaintext: impl AsRef<[u8]>, key: &Key) -> Result<Envelope, Error> {
		let nonce = self.nonces.next_nonce()?;
		let ciphertext = aes_cbc::encrypt(key, &nonce, plaintext.as_ref())?;

		tracing::debug!(key_id=%key_id(key), "Encrypting");

		Ok(Envelope::new(nonce, ciphertext))
	}

	/// Decrypt an [`Envelope`] using `key`.
	///
	/// # Errors
	///
	/// Will return [`Error::Decryption`] if the envelope was encrypted with a different key, or the
	/// ciphertext has been corrupted.
	#[tracing::instrument(level = "debug", skip(self, envelope, key))]
	pub fn open(&self, envelope: &Envelope, key: &Key) -> Result<Vec<u8>, Error> {
		tracing::debug!(key_id=%key_id(key), "Decrypting");

		aes_cbc::decrypt(key, envelope.nonce(), envelope.ciphertext())
	}

	/// Encrypt `plaintext` under `key`, producing printable text that [`decrypt`](Self::decrypt)
	/// can turn back into the plaintext.
	///
	/// # Errors
	///
	/// Will return [`Error::KeyLength`] if `key` isn't exactly 32 bytes long, before anything else
	/// is done.  Otherwise, as for [`seal`](Self::seal).
	#[tracing::instrument(level = "debug", skip(self, plaintext, key))]
	pub fn encrypt(
		&self,
		plaintext: impl AsRef<[u8]>,
		key: impl AsRef<[u8]>,
	) -> Result<String, Error> {
		let key = Key::try_from(key.as_ref())?;

		Ok(self.seal(plaintext, &key)?.to_text())
	}

	/// Decrypt text produced by [`encrypt`](Self::encrypt).
	///
	/// The text is decoded leniently: decoding stops at the first `=` or other character that
	/// can't be part of the encoding, and whatever comes after it is ignored.
	///
	/// # Errors
	///
	/// Will return one of the following:
	/// * [`Error::KeyLength`] if `key` isn't exactly 32 bytes long.
	/// * [`Error::MalformedEnvelope`] if the decoded text is too short to hold a nonce, which
	///   means it was truncated, or was never an envelope in the first place.
	/// * [`Error::Decryption`] if the text was encrypted with a different key, or was corrupted.
	#[tracing::instrument(level = "debug", skip(self, encoded, key))]
	pub fn decrypt(
		&self,
		encoded: impl AsRef<str>,
		key: impl AsRef<[u8]>,
	) -> Result<Vec<u8>, Error> {
		let key = Key::try_from(key.as_ref())?;
		let envelope = Envelope::from_text(encoded)?;

		self.open(&envelope, &key)
	}

	/// As for [`decrypt`](Self::decrypt), but for when the plaintext is known to be a string.
	///
	/// # Errors
	///
	/// As for [`decrypt`](Self::decrypt), plus [`Error::Utf8`] if the plaintext isn't valid UTF-8.
	pub fn decrypt_to_string(
		&self,
		encoded: impl AsRef<str>,
		key: impl AsRef<[u8]>,
	) -> Result<String, Error> {
		String::from_utf8(self.decrypt(encoded, key)?).map_err(|e| Error::Utf8(e.utf8_error()))
	}
}

/// Encrypt `plaintext` under `key`, using an [`EnvelopeCipher`] with OS-provided nonces.
///
/// # Errors
///
/// See [`EnvelopeCipher::encrypt`].
pub fn encrypt(plaintext: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<String, Error> {
	EnvelopeCipher::new().encrypt(plaintext, key)
}

/// Decrypt text produced by [`encrypt`].
///
/// # Errors
///
/// See [`EnvelopeCipher::decrypt`].
pub fn decrypt(encoded: impl AsRef<str>, key: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
	EnvelopeCipher::new().decrypt(encoded, key)
}

/// Decrypt text produced by [`encrypt`], when the plaintext is known to be a string.
///
/// # Errors
///
/// See [`EnvelopeCipher::decrypt_to_string`].
pub fn decrypt_to_string(
	encoded: impl AsRef<str>,
	key: impl AsRef<[u8]>,
) -> Result<String, Error> {
	EnvelopeCipher::new().decrypt_to_string(encoded, key)
}

//! Symmetric encryption of arbitrary bytes into a self-contained, text-safe envelope.
//!
//! If you want to "encrypt this with this key, and get text back" without having to think about
//! cipher modes, padding, nonces, or how to stuff binary data into a text field, then this crate
//! is for you.
//!
//! ```rust
//! # fn main() -> Result<(), aes_envelope::Error> {
//! let key = [0x2au8; 32];
//!
//! let text = aes_envelope::encrypt("my deepest, darkest secret", key)?;
//!
//! assert_eq!(
//!     "my deepest, darkest secret",
//!     aes_envelope::decrypt_to_string(&text, key)?
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Under the hood, every call to [`encrypt`] draws a fresh 16-byte nonce from the operating
//! system's secure random number generator, encrypts the plaintext with AES-256 in CBC mode
//! (with PKCS#7 padding), and base64-encodes `nonce || ciphertext`.  That text is all you need to
//! store or send; given the same key, [`decrypt`] turns it back into the plaintext.  Because the
//! nonce is different every time, encrypting the same plaintext twice gives two different
//! results.
//!
//! Keys must be exactly 32 bytes.  Where they come from, and keeping them safe, is up to you.
//!
//! # Things this crate won't do
//!
//! This is *confidentiality only*.  There is no integrity protection: a wrong key, or a corrupted
//! ciphertext, will almost always be caught by the padding check and give you [`Error::Decryption`],
//! but it isn't guaranteed, and someone who can modify a ciphertext can make controlled changes to
//! the plaintext you get back.  If you need tamper-proofing, use an authenticated encryption scheme.
//!
//! There's also no deriving keys from passwords, no key storage or rotation, and no streaming of
//! large inputs.
//!
//! # Envelope Format
//!
//! The decoded text is `nonce[16] || ciphertext`, where the ciphertext is always a whole number
//! of 16-byte blocks.  There is no version tag or algorithm identifier.  See [`Envelope`] and
//! [`text_codec`] if you need to take envelopes apart yourself.
mod aes_cbc;
mod envelope;
mod envelope_cipher;
mod error;
mod key;
mod key_id;
mod nonce;
pub mod text_codec;

pub use envelope::Envelope;
pub use envelope_cipher::{EnvelopeCipher, decrypt, decrypt_to_string, encrypt};
pub use error::Error;
pub use key::Key;
pub use nonce::{NonceSource, OsNonceSource};

use key_id::key_id;

/// Length of an AES-256 key, in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the per-message nonce (the CBC IV), in bytes.
pub const NONCE_LEN: usize = 16;

/// AES block length, in bytes.  Ciphertexts are always a non-zero multiple of this.
pub const BLOCK_LEN: usize = 16;

#[cfg(test)]
pub(crate) fn init_test_tracing() {
	use std::sync::Once;
	use tracing_subscriber::{layer::SubscriberExt as _, registry::Registry};

	static INIT: Once = Once::new();

	INIT.call_once(|| {
		let layer = tracing_tree::HierarchicalLayer::default()
			.with_writer(tracing_subscriber::fmt::TestWriter::new())
			.with_indent_lines(true)
			.with_indent_amount(2)
			.with_targets(true);

		let sub = Registry::default().with(layer);
		tracing::subscriber::set_global_default(sub).unwrap();
	});
}

use secrecy::ExposeSecret as _;

use super::{Error, KEY_LEN};

/// A 256-bit key used by an [`EnvelopeCipher`](super::EnvelopeCipher) for encrypting or
/// decrypting data.
///
/// The key material is zeroed when the [`Key`] is dropped, and never appears in `Debug` output.
#[derive(Debug)]
pub struct Key(secrecy::SecretBox<[u8; KEY_LEN]>);

impl Key {
	pub fn expose_secret(&self) -> &[u8; KEY_LEN] {
		self.0.expose_secret()
	}
}

impl Clone for Key {
	fn clone(&self) -> Self {
		Self(Box::new(*self.expose_secret()).into())
	}
}

impl From<Box<[u8; KEY_LEN]>> for Key {
	fn from(k: Box<[u8; KEY_LEN]>) -> Self {
		Key(k.into())
	}
}

impl From<[u8; KEY_LEN]> for Key {
	fn from(k: [u8; KEY_LEN]) -> Self {
		Box::new(k).into()
	}
}

impl TryFrom<&[u8]> for Key {
	type Error = Error;

	fn try_from(k: &[u8]) -> Result<Self, Error> {
		let k: [u8; KEY_LEN] = k
			.try_into()
			.map_err(|_| Error::key_length(k.len()))?;

		Ok(k.into())
	}
}

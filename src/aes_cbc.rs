use aes::Aes256;
use cbc::cipher::{BlockDecryptMut as _, BlockEncryptMut as _, KeyIvInit as _, block_padding::Pkcs7};

use super::{Error, Key, NONCE_LEN};

type Encryptor = cbc::Encryptor<Aes256>;
type Decryptor = cbc::Decryptor<Aes256>;

// A fresh cipher context per call; nothing here is shared between callers.
pub(crate) fn encrypt(
	key: &Key,
	iv: &[u8; NONCE_LEN],
	plaintext: &[u8],
) -> Result<Vec<u8>, Error> {
	let cipher = Encryptor::new_from_slices(key.expose_secret(), iv)
		.map_err(|e| Error::cipher_engine(e.to_string()))?;

	Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Fails with [`Error::Decryption`] if the ciphertext isn't a whole number of blocks, or if the
/// padding doesn't check out.  We don't say which.
pub(crate) fn decrypt(
	key: &Key,
	iv: &[u8; NONCE_LEN],
	ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
	let cipher = Decryptor::new_from_slices(key.expose_secret(), iv)
		.map_err(|e| Error::cipher_engine(e.to_string()))?;

	cipher
		.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
		.map_err(|_| Error::Decryption)
}

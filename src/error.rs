#[derive(Debug, thiserror::Error, thiserror_ext::Construct)]
#[non_exhaustive]
pub enum Error {
	#[error("key must be 32 bytes, got {actual}")]
	KeyLength { actual: usize },

	#[error("secure random source failed: {0}")]
	RandomSource(String),

	#[error("cipher engine rejected parameters: {0}")]
	CipherEngine(String),

	#[error("envelope must be at least 16 bytes, got {actual}")]
	MalformedEnvelope { actual: usize },

	#[error("failed to decrypt ciphertext")]
	Decryption,

	#[error("invalid encoded text: {0}")]
	InvalidEncoding(String),

	#[error("decrypted plaintext is not valid UTF-8: {0}")]
	Utf8(std::str::Utf8Error),
}

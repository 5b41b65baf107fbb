use super::{Error, NONCE_LEN};

/// Somewhere to get fresh, unpredictable nonces from.
///
/// Every encryption draws a brand new nonce, and a CBC nonce that repeats under the same key, or
/// that an attacker can predict, gives away information about the plaintexts.  That means
/// implementations *must* be backed by a cryptographically secure random number generator.
/// General-purpose PRNGs need not apply.
///
/// You almost certainly want [`OsNonceSource`], which is what [`EnvelopeCipher`](super::EnvelopeCipher)
/// uses unless told otherwise.
pub trait NonceSource {
	/// Fill `nonce` with fresh random bytes.
	///
	/// # Errors
	///
	/// Will return [`Error::RandomSource`] if random bytes could not be obtained.  Implementations
	/// must fail rather than fall back to a weaker source.
	fn fill(&self, nonce: &mut [u8; NONCE_LEN]) -> Result<(), Error>;

	/// Produce a fresh nonce.
	fn next_nonce(&self) -> Result<[u8; NONCE_LEN], Error> {
		let mut nonce = [0u8; NONCE_LEN];
		self.fill(&mut nonce)?;
		Ok(nonce)
	}
}

/// Nonces straight from the operating system's CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
	#[tracing::instrument(level = "trace", skip(nonce))]
	fn fill(&self, nonce: &mut [u8; NONCE_LEN]) -> Result<(), Error> {
		use rand::{TryRngCore as _, rngs::OsRng};

		OsRng.try_fill_bytes(nonce).map_err(|e| {
			tracing::debug!(error=%e, "OS random source failed");
			Error::random_source(e.to_string())
		})
	}
}

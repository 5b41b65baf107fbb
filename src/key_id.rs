use sha2::{Digest as _, Sha256};

use super::Key;

type Kid = [u8; 16];

const KEY_ID_DOMAIN: &[u8] = b"aes-envelope::key_id";

/// A non-secret fingerprint of a [`Key`], so that log output can say *which* key was used without
/// saying anything useful about the key itself.
#[allow(clippy::derived_hash_with_manual_eq)] // k1 == k2 => hash(k1) == hash(k2) will hold
#[derive(Clone, Copy, Debug, Hash)]
#[repr(transparent)]
pub(super) struct KeyId(Kid);

impl PartialEq for KeyId {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq::constant_time_eq_n(&self.0, &other.0)
	}
}

impl Eq for KeyId {}

impl std::fmt::Display for KeyId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for b in &self.0 {
			f.write_fmt(format_args!("{b:02x}"))?;
		}

		Ok(())
	}
}

/// Get a reasonably-unique ID for a key
#[tracing::instrument(level = "trace", skip(key))]
pub(super) fn key_id(key: &Key) -> KeyId {
	let digest = Sha256::new()
		.chain_update(KEY_ID_DOMAIN)
		.chain_update(key.expose_secret())
		.finalize();

	let mut kid: Kid = Default::default();
	let n = kid.len();
	kid.copy_from_slice(&digest[..n]);

	KeyId(kid)
}

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Computes the raw SHA-256 digest of the UTF-8 bytes of `password`.
#[inline]
pub fn digest(password: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Returns the lowercase hex SHA-256 digest of `password`, or an empty string
/// for an empty password.
///
/// This is a pure function. Registering the result in a [`DigestStore`] is
/// the caller's job (see [`Session::generate`]).
///
/// [`DigestStore`]: crate::DigestStore
/// [`Session::generate`]: crate::Session::generate
pub fn generate(password: &str) -> String {
    if password.is_empty() {
        return String::new();
    }
    hex::encode(digest(password))
}

/// Async form of [`generate`]. Hashing a short string never blocks, so this
/// resolves on first poll.
#[cfg(feature = "tokio")]
pub async fn generate_async(password: &str) -> String {
    generate(password)
}

use sha2::{Digest, Sha256};

/// Hash a token with SHA-256 before it touches the blacklist store.
/// Raw refresh tokens are never persisted anywhere.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

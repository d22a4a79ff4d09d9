use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
    TaskFailed,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::HashFailed => write!(f, "Failed to hash password"),
            HashError::VerifyFailed => write!(f, "Failed to verify password"),
            HashError::TaskFailed => write!(f, "Hashing task failed"),
        }
    }
}
impl Error for HashError {}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) means the password simply does not match;
    /// Err means verification itself could not run.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}

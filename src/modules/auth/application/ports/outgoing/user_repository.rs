use async_trait::async_trait;
use std::error::Error;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::LoyaltyStatus;

#[derive(Debug)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserAlreadyExists => write!(f, "User already exists"),
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
impl Error for UserRepositoryError {}

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i16,
    pub phone: String,
    pub status: LoyaltyStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i16>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub status: Option<LoyaltyStatus>,
}

/// Confirmation slice returned by write operations.
#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: UpdateProfileData,
    ) -> Result<UserResult, UserRepositoryError>;

    /// Hard delete. Cascades to the user's products (and those products'
    /// photos, ratings, reviews and cart items), the user's own ratings
    /// and reviews, and the user's cart with its items.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}

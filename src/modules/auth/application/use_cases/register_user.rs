use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use email_address::EmailAddress;

// ========================= Register Request =========================

/// Validated registration input: credentials plus the profile fields.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    age: i16,
    phone: String,
    status: LoyaltyStatus,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    InvalidUsername(String),
    InvalidEmail(String),
    InvalidPassword(String),
    InvalidProfile(String),
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::InvalidUsername(msg) => write!(f, "{}", msg),
            RegisterRequestError::InvalidEmail(msg) => write!(f, "{}", msg),
            RegisterRequestError::InvalidPassword(msg) => write!(f, "{}", msg),
            RegisterRequestError::InvalidProfile(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        username: String,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        age: i16,
        phone: String,
        status: Option<LoyaltyStatus>,
    ) -> Result<Self, RegisterRequestError> {
        let username = username.trim().to_string();
        if username.len() < 3 || username.len() > 30 {
            return Err(RegisterRequestError::InvalidUsername(
                "Username must be between 3 and 30 characters".to_string(),
            ));
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        if password.trim().len() < 8 {
            return Err(RegisterRequestError::InvalidPassword(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(RegisterRequestError::InvalidProfile(
                "First and last name are required".to_string(),
            ));
        }

        if !(0..=150).contains(&age) {
            return Err(RegisterRequestError::InvalidProfile(
                "Age must be between 0 and 150".to_string(),
            ));
        }

        let phone = phone.trim().to_string();
        if phone.is_empty() {
            return Err(RegisterRequestError::InvalidProfile(
                "Phone number is required".to_string(),
            ));
        }

        Ok(Self {
            username,
            email,
            password,
            first_name,
            last_name,
            age,
            phone,
            status: status.unwrap_or_default(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone)]
pub enum RegisterError {
    UserAlreadyExists,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::UserAlreadyExists => write!(f, "User already exists"),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

// ========================= Register Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: RegisteredIdentity,
}

// ========================= Register Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest)
        -> Result<RegisterUserResponse, RegisterError>;
}

pub struct RegisterUserUseCase {
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl RegisterUserUseCase {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl IRegisterUserUseCase for RegisterUserUseCase {
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterError> {
        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                username: request.username,
                email: request.email,
                password_hash,
                first_name: request.first_name,
                last_name: request.last_name,
                age: request.age,
                phone: request.phone,
                status: request.status,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterError::UserAlreadyExists,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        // Registration logs the user straight in: hand back a token pair.
        let access_token = self
            .token_provider
            .generate_access_token(created.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(created.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse {
            access_token,
            refresh_token,
            user: RegisteredIdentity {
                id: created.id,
                username: created.username,
                email: created.email,
            },
        })
    }
}

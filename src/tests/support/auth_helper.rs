use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

/// A JWT service wired the way handlers expect it in app_data, plus the
/// concrete service for minting test tokens.
pub fn test_token_provider() -> (
    Arc<JwtTokenService>,
    web::Data<Arc<dyn TokenProvider + Send + Sync>>,
) {
    let service = Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_min_32_characters_long".to_string(),
        issuer: "testapp".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    }));

    let provider: Arc<dyn TokenProvider + Send + Sync> = service.clone();
    (service, web::Data::new(provider))
}

/// Authorization header tuple for a freshly minted access token.
pub fn bearer_header(jwt: &JwtTokenService, user_id: Uuid) -> (&'static str, String) {
    let token = jwt
        .generate_access_token(user_id)
        .expect("test token generation");
    ("Authorization", format!("Bearer {token}"))
}

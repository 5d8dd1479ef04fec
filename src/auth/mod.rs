use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

/// Access token claims. The subject is the user's email.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims expiring `expiry_minutes` from now. An expiry past chrono's
    /// range is a `TokenGeneration` error.
    pub fn new(email: impl Into<String>, expiry_minutes: u64) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                JwtError::TokenGeneration(format!("token expiry of {} minutes is out of range", expiry_minutes))
            })?;

        Ok(Self {
            sub: email.into(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,
}

/// Issue a signed access token for `email`.
pub fn generate_jwt(email: &str, security: &SecurityConfig) -> Result<String, JwtError> {
    if security.jwt_secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let claims = Claims::new(email, security.jwt_expiry_minutes)?;
    let encoding_key = EncodingKey::from_secret(security.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Check signature and expiry and return the claims.
pub fn validate_jwt(token: &str, security: &SecurityConfig) -> Result<Claims, JwtError> {
    if security.jwt_secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::Validation(format!("Invalid JWT token: {}", e)))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn security() -> SecurityConfig {
        AppConfig::development().security
    }

    #[test]
    fn token_round_trip_carries_email() {
        let security = security();
        let token = generate_jwt("test@test.com", &security).expect("should issue token");
        let claims = validate_jwt(&token, &security).expect("should validate token");
        assert_eq!(claims.sub, "test@test.com");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_jwt("test@test.com", &security()).unwrap();
        let mut other = security();
        other.jwt_secret = "another-secret".to_string();
        assert!(matches!(validate_jwt(&token, &other), Err(JwtError::Validation(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = security();
        // Past the default 60s leeway
        let claims = Claims {
            sub: "test@test.com".to_string(),
            iat: Utc::now().timestamp() - 3600,
            exp: Utc::now().timestamp() - 600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(security.jwt_secret.as_bytes()),
        )
        .unwrap();
        assert!(matches!(validate_jwt(&token, &security), Err(JwtError::Validation(_))));
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(validate_jwt("not.a.jwt", &security()).is_err());
        assert!(validate_jwt("", &security()).is_err());
    }

    #[test]
    fn out_of_range_expiry_is_an_error() {
        let mut security = security();
        security.jwt_expiry_minutes = 200_000_000_000_000;
        assert!(matches!(generate_jwt("a@b.c", &security), Err(JwtError::TokenGeneration(_))));

        security.jwt_expiry_minutes = u64::MAX;
        assert!(matches!(generate_jwt("a@b.c", &security), Err(JwtError::TokenGeneration(_))));
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        let mut security = security();
        security.jwt_secret.clear();
        assert!(matches!(generate_jwt("a@b.c", &security), Err(JwtError::InvalidSecret)));
    }
}

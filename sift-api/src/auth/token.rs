use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued to.
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies bearer tokens (HS256). The secret and TTL come in
/// through [`Settings`](crate::config::Settings); nothing here reads the
/// environment.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &str, token_ttl_hours: i64) -> Self {
        let mut validation = Validation::default();
        // Expiry decisions belong to the configured TTL alone.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(token_ttl_hours),
        }
    }

    pub fn sign(&self, user_id: i32) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Invalid)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let signer = TokenSigner::new("secret", 1);
        let token = signer.sign(42).unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let signer = TokenSigner::new("secret", -2);
        let token = signer.sign(42).unwrap();

        assert_eq!(signer.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let signer = TokenSigner::new("secret", 1);
        let other = TokenSigner::new("other-secret", 1);
        let token = other.sign(42).unwrap();

        assert_eq!(signer.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        let signer = TokenSigner::new("secret", 1);
        assert_eq!(signer.verify("not.a.token"), Err(TokenError::Invalid));
    }
}

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use kernel::model::auth::{AccessToken, Identity};
use kernel::repository::auth::AuthProvider;
use serde::{Deserialize, Serialize};
use shared::config::AuthConfig;
use shared::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies the stateless credential. The token is the only
/// artifact: nothing is stored server-side, so logout is the client
/// discarding its copy.
pub struct JwtAuthProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtAuthProvider {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(cfg.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(cfg.token_secret.as_bytes()),
            ttl: Duration::seconds(cfg.token_ttl),
        }
    }
}

impl AuthProvider for JwtAuthProvider {
    fn issue_token(&self, email: &str) -> AppResult<AccessToken> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map(AccessToken)
            .map_err(AppError::TokenCreationError)
    }

    fn verify_token(&self, token: &str) -> AppResult<Identity> {
        // Expired, tampered and malformed tokens are indistinguishable to
        // the caller: all of them fail authentication.
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| Identity {
                email: data.claims.sub,
            })
            .map_err(|_| AppError::UnauthenticatedError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(secret: &str) -> JwtAuthProvider {
        JwtAuthProvider::new(&AuthConfig {
            token_secret: secret.into(),
            token_ttl: 3600,
        })
    }

    #[test]
    fn issued_token_verifies_to_the_same_email() {
        let provider = provider("test-secret");
        let token = provider.issue_token("a@x.com").unwrap();
        let identity = provider.verify_token(token.as_str()).unwrap();
        assert_eq!(identity.email, "a@x.com");
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = provider("first-secret").issue_token("a@x.com").unwrap();
        let err = provider("second-secret")
            .verify_token(token.as_str())
            .unwrap_err();
        assert!(matches!(err, AppError::UnauthenticatedError));
    }

    #[test]
    fn expired_token_is_rejected() {
        let provider = provider("test-secret");
        let now = Utc::now();
        let stale = Claims {
            sub: "a@x.com".into(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::default(), &stale, &provider.encoding_key).unwrap();
        let err = provider.verify_token(&token).unwrap_err();
        assert!(matches!(err, AppError::UnauthenticatedError));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let err = provider("test-secret")
            .verify_token("definitely.not.a-token")
            .unwrap_err();
        assert!(matches!(err, AppError::UnauthenticatedError));
    }
}

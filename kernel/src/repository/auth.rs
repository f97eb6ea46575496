use shared::error::AppResult;

use crate::model::auth::{AccessToken, Identity};

/// Stateless credential issuance and verification. Verification is pure
/// computation over the token itself; no store lookup is involved, so
/// issued tokens cannot be revoked early.
pub trait AuthProvider: Send + Sync {
    fn issue_token(&self, email: &str) -> AppResult<AccessToken>;
    fn verify_token(&self, token: &str) -> AppResult<Identity>;
}

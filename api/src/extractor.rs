use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use kernel::model::auth::Identity;
use registry::AppRegistry;
use shared::error::AppError;

/// Name of the cookie carrying the signed credential.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Verified caller identity, extracted from the credential cookie.
/// Handlers that take this as an argument reject unauthenticated
/// requests before their body runs.
pub struct AuthorizedUser {
    pub identity: Identity,
}

impl AuthorizedUser {
    pub fn email(&self) -> &str {
        &self.identity.email
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or(AppError::UnauthenticatedError)?;
        let identity = registry.auth_provider().verify_token(&token)?;
        Ok(Self { identity })
    }
}

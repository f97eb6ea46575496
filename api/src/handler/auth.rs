use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use garde::Validate;
use registry::AppRegistry;
use shared::env::Environment;
use shared::error::AppResult;

use crate::extractor::ACCESS_TOKEN_COOKIE;
use crate::model::auth::IssueTokenRequest;

pub async fn issue_token(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Json(req): Json<IssueTokenRequest>,
) -> AppResult<(CookieJar, StatusCode)> {
    req.validate(&())?;

    let token = registry.auth_provider().issue_token(&req.email)?;
    let cookie = credential_cookie(registry.environment(), token.into_inner());
    Ok((jar.add(cookie), StatusCode::OK))
}

/// Logout for a stateless credential is the client dropping it; the
/// server can only instruct the browser to do so.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let removal = Cookie::build(ACCESS_TOKEN_COOKIE).path("/").build();
    (jar.remove(removal), StatusCode::OK)
}

fn credential_cookie(env: Environment, token: String) -> Cookie<'static> {
    // Deployed frontends sit on another origin and need SameSite=None,
    // which browsers only accept together with Secure. Local development
    // runs over plain HTTP.
    let (same_site, secure) = match env {
        Environment::Development => (SameSite::Lax, false),
        Environment::Production => (SameSite::None, true),
    };
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(same_site)
        .path("/")
        .build()
}

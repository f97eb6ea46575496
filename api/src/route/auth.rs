use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::auth::{issue_token, logout};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", get(logout))
}

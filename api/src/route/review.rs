use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::review::{register_review, show_review_list, show_room_reviews};

pub fn build_review_routers() -> Router<AppRegistry> {
    let review_routers = Router::new()
        .route("/", post(register_review))
        .route("/", get(show_review_list))
        .route("/:room_id", get(show_room_reviews));

    Router::new().nest("/reviews", review_routers)
}

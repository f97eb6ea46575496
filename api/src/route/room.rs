use axum::routing::{get, patch};
use axum::Router;
use registry::AppRegistry;

use crate::handler::room::{show_room, show_room_list, update_room_availability};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", get(show_room_list))
        .route("/:room_id", get(show_room))
        .route("/:room_id", patch(update_room_availability));

    Router::new().nest("/rooms", room_routers)
}

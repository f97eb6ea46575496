use axum::routing::{delete, get, patch, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::booking::{
    delete_booking, register_booking, show_user_bookings, update_booking_date,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    // The GET variant reads the segment as the owner's email; the PATCH
    // and DELETE variants read it as a booking id.
    let booking_routers = Router::new()
        .route("/", post(register_booking))
        .route("/:id", get(show_user_bookings))
        .route("/:id", patch(update_booking_date))
        .route("/:id", delete(delete_booking));

    Router::new().nest("/bookings", booking_routers)
}

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::id::RoomId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::room::{
    RoomListQuery, RoomResponse, RoomsResponse, UpdateRoomAvailabilityRequest,
    UpdateRoomAvailabilityRequestWithId,
};

pub async fn show_room_list(
    Query(query): Query<RoomListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    query.validate(&())?;

    registry
        .room_repository()
        .find_all(query.into())
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound(format!(
                "room {room_id} not found"
            ))),
        })
}

/// Manual toggle endpoint. This writes the flag without a booking
/// transaction, so it can desynchronize room and booking state if
/// misused.
pub async fn update_room_availability(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomAvailabilityRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateRoomAvailabilityRequestWithId::new(room_id, req);
    registry
        .room_repository()
        .update_availability(update.into())
        .await
        .map(|_| StatusCode::OK)
}

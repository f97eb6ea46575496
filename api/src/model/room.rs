use derive_new::new;
use garde::Validate;
use kernel::model::id::RoomId;
use kernel::model::room::{event::UpdateAvailability, Room, RoomListOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomListQuery {
    #[garde(skip)]
    pub min_range: Option<i64>,
    #[garde(skip)]
    pub max_range: Option<i64>,
}

impl From<RoomListQuery> for RoomListOptions {
    fn from(value: RoomListQuery) -> Self {
        let RoomListQuery {
            min_range,
            max_range,
        } = value;
        RoomListOptions {
            min_price: min_range,
            max_price: max_range,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: RoomId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: i64,
    pub available: bool,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            name,
            description,
            image_url,
            price,
            available,
        } = value;
        Self {
            room_id,
            name,
            description,
            image_url,
            price,
            available,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

/// `booking: true` marks the room as booked, i.e. unavailable.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomAvailabilityRequest {
    #[garde(skip)]
    pub booking: bool,
}

#[derive(new)]
pub struct UpdateRoomAvailabilityRequestWithId(RoomId, UpdateRoomAvailabilityRequest);

impl From<UpdateRoomAvailabilityRequestWithId> for UpdateAvailability {
    fn from(value: UpdateRoomAvailabilityRequestWithId) -> Self {
        let UpdateRoomAvailabilityRequestWithId(room_id, req) = value;
        UpdateAvailability {
            room_id,
            available: !req.booking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_flag_inverts_into_availability() {
        let update: UpdateAvailability = UpdateRoomAvailabilityRequestWithId::new(
            RoomId::new(),
            UpdateRoomAvailabilityRequest { booking: true },
        )
        .into();
        assert!(!update.available);
    }
}

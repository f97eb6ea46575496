use crate::model::id::{ReviewId, RoomId};
use chrono::{DateTime, Utc};

pub mod event;

/// Reviews are append-only and independent of booking state: posting one
/// requires no booking history for the room.
#[derive(Debug, Clone)]
pub struct Review {
    pub review_id: ReviewId,
    pub room_id: RoomId,
    pub user_email: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

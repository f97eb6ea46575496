use crate::model::id::{BookingId, RoomId};
use chrono::{DateTime, NaiveDate, Utc};

pub mod event;

/// A booking holds the room's "unavailable" state for as long as it
/// exists. At most one booking references a given room at any time.
#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub user_email: String,
    pub booked_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

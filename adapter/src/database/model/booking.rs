use kernel::model::booking::Booking;
use kernel::model::id::{BookingId, RoomId};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub user_email: String,
    pub booked_date: chrono::NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            room_id,
            user_email,
            booked_date,
            created_at,
        } = value;
        Booking {
            booking_id,
            room_id,
            user_email,
            booked_date,
            created_at,
        }
    }
}

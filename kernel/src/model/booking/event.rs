use crate::model::id::{BookingId, RoomId};
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub room_id: RoomId,
    pub user_email: String,
    pub booked_date: NaiveDate,
}

#[derive(Debug, new)]
pub struct UpdateBookingDate {
    pub booking_id: BookingId,
    pub requested_by: String,
    pub booked_date: NaiveDate,
}

#[derive(Debug, new)]
pub struct DeleteBooking {
    pub booking_id: BookingId,
    pub requested_by: String,
}

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::event::{CreateBooking, DeleteBooking, UpdateBookingDate};
use crate::model::booking::Booking;
use crate::model::id::BookingId;

/// Booking lifecycle operations. Implementations must guarantee at most
/// one live booking per room: of any set of concurrent `create` calls on
/// the same available room, exactly one succeeds and the rest fail with
/// `AppError::ResourceConflict`.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Books a room for the given user. Flips the room to unavailable and
    /// inserts the booking record as one logical transaction.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    /// Cancels a booking owned by `requested_by` and restores the room's
    /// availability.
    async fn delete(&self, event: DeleteBooking) -> AppResult<()>;
    /// Moves a booking to a new date. Only the date changes; room
    /// availability is not touched.
    async fn update_date(&self, event: UpdateBookingDate) -> AppResult<Booking>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_by_user_email(&self, user_email: &str) -> AppResult<Vec<Booking>>;
}

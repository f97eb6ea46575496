use crate::model::id::RoomId;
use derive_new::new;

/// Administrative direct set of the availability flag. This bypasses the
/// booking transaction entirely, so a careless caller can desynchronize
/// the flag from the bookings table.
#[derive(Debug, new)]
pub struct UpdateAvailability {
    pub room_id: RoomId,
    pub available: bool,
}

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::RoomId;
use crate::model::room::{event::UpdateAvailability, Room, RoomListOptions};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Lists rooms, optionally restricted to an inclusive price band.
    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    /// Sets the availability flag directly. Idempotent: writing the
    /// current value again still reports success.
    async fn update_availability(&self, event: UpdateAvailability) -> AppResult<()>;
}

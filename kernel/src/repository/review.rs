use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::RoomId;
use crate::model::review::{event::CreateReview, Review};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, event: CreateReview) -> AppResult<Review>;
    /// All reviews across rooms, newest first.
    async fn find_all(&self) -> AppResult<Vec<Review>>;
    /// Reviews for one room, newest first.
    async fn find_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Review>>;
}

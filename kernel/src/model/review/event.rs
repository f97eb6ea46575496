use crate::model::id::RoomId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReview {
    pub room_id: RoomId,
    pub user_email: String,
    pub rating: i16,
    pub comment: String,
}

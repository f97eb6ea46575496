use kernel::model::id::{ReviewId, RoomId};
use kernel::model::review::Review;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub room_id: RoomId,
    pub user_email: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            room_id,
            user_email,
            rating,
            comment,
            created_at,
        } = value;
        Review {
            review_id,
            room_id,
            user_email,
            rating,
            comment,
            created_at,
        }
    }
}

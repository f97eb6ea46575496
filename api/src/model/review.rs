use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::id::{ReviewId, RoomId};
use kernel::model::review::{event::CreateReview, Review};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(range(min = 1, max = 5))]
    pub rating: i16,
    #[garde(length(min = 1))]
    pub comment: String,
}

#[derive(new)]
pub struct CreateReviewRequestWithAuthor(String, CreateReviewRequest);

impl From<CreateReviewRequestWithAuthor> for CreateReview {
    fn from(value: CreateReviewRequestWithAuthor) -> Self {
        let CreateReviewRequestWithAuthor(
            user_email,
            CreateReviewRequest {
                room_id,
                rating,
                comment,
            },
        ) = value;
        CreateReview {
            room_id,
            user_email,
            rating,
            comment,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub room_id: RoomId,
    pub user_email: String,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            room_id,
            user_email,
            rating,
            comment,
            created_at,
        } = value;
        Self {
            review_id,
            room_id,
            user_email,
            rating,
            comment,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub items: Vec<ReviewResponse>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(value: Vec<Review>) -> Self {
        Self {
            items: value.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

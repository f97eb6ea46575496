use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::{ReviewId, RoomId};
use kernel::model::review::{event::CreateReview, Review};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::review::ReviewRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<Review> {
        let room_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM rooms WHERE room_id = $1)")
                .bind(event.room_id)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if !room_exists {
            return Err(AppError::EntityNotFound(format!(
                "room {} not found",
                event.room_id
            )));
        }

        let review = Review {
            review_id: ReviewId::new(),
            room_id: event.room_id,
            user_email: event.user_email,
            rating: event.rating,
            comment: event.comment,
            created_at: Utc::now(),
        };
        let res = sqlx::query(
            r#"
                INSERT INTO reviews (review_id, room_id, user_email, rating, comment, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review.review_id)
        .bind(review.room_id)
        .bind(&review.user_email)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no review record has been created".into(),
            ));
        }

        Ok(review)
    }

    async fn find_all(&self) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT review_id, room_id, user_email, rating, comment, created_at
                FROM reviews
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn find_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT review_id, room_id, user_email, rating, comment, created_at
                FROM reviews
                WHERE room_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(room_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }
}

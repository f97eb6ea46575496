use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::RoomId;
use kernel::model::room::{event::UpdateAvailability, Room, RoomListOptions};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::room::RoomRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>> {
        let rows: Vec<RoomRow> = match options.price_band() {
            Some((lower, upper)) => {
                sqlx::query_as(
                    r#"
                        SELECT room_id, name, description, image_url, price, available
                        FROM rooms
                        WHERE price BETWEEN $1 AND $2
                        ORDER BY created_at DESC
                    "#,
                )
                .bind(lower)
                .bind(upper)
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as(
                    r#"
                        SELECT room_id, name, description, image_url, price, available
                        FROM rooms
                        ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT room_id, name, description, image_url, price, available
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Room::from))
    }

    async fn update_availability(&self, event: UpdateAvailability) -> AppResult<()> {
        // Writing the current value again is a no-op that still succeeds;
        // only a missing room is an error.
        let res = sqlx::query("UPDATE rooms SET available = $1 WHERE room_id = $2")
            .bind(event.available)
            .bind(event.room_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "room {} not found",
                event.room_id
            )));
        }

        Ok(())
    }
}

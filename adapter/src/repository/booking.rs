use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::booking::event::{CreateBooking, DeleteBooking, UpdateBookingDate};
use kernel::model::booking::Booking;
use kernel::model::id::BookingId;
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::booking::BookingRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        let room: Option<bool> =
            sqlx::query_scalar("SELECT available FROM rooms WHERE room_id = $1")
                .bind(event.room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if room.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "room {} not found",
                event.room_id
            )));
        }

        // The arbitration point. Concurrent attempts on the same room all
        // run this conditional update; the row predicate lets it succeed
        // for exactly one of them.
        let flipped = sqlx::query(
            "UPDATE rooms SET available = FALSE WHERE room_id = $1 AND available = TRUE",
        )
        .bind(event.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if flipped.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "room {} is already booked",
                event.room_id
            )));
        }

        let booking = Booking {
            booking_id: BookingId::new(),
            room_id: event.room_id,
            user_email: event.user_email,
            booked_date: event.booked_date,
            created_at: Utc::now(),
        };
        // Any failure from here on drops the transaction and rolls the
        // flip back; the flag and the booking row move together.
        let inserted = sqlx::query(
            r#"
                INSERT INTO bookings (booking_id, room_id, user_email, booked_date, created_at)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(booking.booking_id)
        .bind(booking.room_id)
        .bind(&booking.user_email)
        .bind(booking.booked_date)
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if inserted.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking)
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, room_id, user_email, booked_date, created_at
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let Some(booking) = row else {
            return Err(AppError::EntityNotFound(format!(
                "booking {} not found",
                event.booking_id
            )));
        };
        if booking.user_email != event.requested_by {
            return Err(AppError::ForbiddenOperation);
        }

        let deleted = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(event.booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if deleted.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been deleted".into(),
            ));
        }

        // The room must not stay unavailable once its booking is gone. A
        // failed restore leaves the room needing manual repair, so it is
        // logged before the error surfaces.
        let restored = sqlx::query("UPDATE rooms SET available = TRUE WHERE room_id = $1")
            .bind(booking.room_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if restored.rows_affected() < 1 {
            tracing::error!(
                room_id = %booking.room_id,
                booking_id = %event.booking_id,
                "availability was not restored after cancelling booking"
            );
            return Err(AppError::NoRowsAffectedError(
                "room availability was not restored".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn update_date(&self, event: UpdateBookingDate) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, room_id, user_email, booked_date, created_at
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let Some(booking) = row else {
            return Err(AppError::EntityNotFound(format!(
                "booking {} not found",
                event.booking_id
            )));
        };
        if booking.user_email != event.requested_by {
            return Err(AppError::ForbiddenOperation);
        }

        let res = sqlx::query("UPDATE bookings SET booked_date = $1 WHERE booking_id = $2")
            .bind(event.booked_date)
            .bind(event.booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        let mut booking = Booking::from(booking);
        booking.booked_date = event.booked_date;
        Ok(booking)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, room_id, user_email, booked_date, created_at
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn find_by_user_email(&self, user_email: &str) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, room_id, user_email, booked_date, created_at
                FROM bookings
                WHERE user_email = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(user_email)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }
}

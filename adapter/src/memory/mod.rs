//! In-memory implementations of the repository traits.
//!
//! These back the unit and router tests so booking semantics can be
//! exercised without a database. All state sits behind a single mutex,
//! which gives `create` the same guarantee the Postgres implementation
//! gets from its conditional update: the availability check and the flip
//! are one atomic step.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::booking::event::{CreateBooking, DeleteBooking, UpdateBookingDate};
use kernel::model::booking::Booking;
use kernel::model::id::{BookingId, ReviewId, RoomId};
use kernel::model::review::{event::CreateReview, Review};
use kernel::model::room::{event::UpdateAvailability, Room, RoomListOptions};
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::review::ReviewRepository;
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

#[derive(Default)]
struct MemoryState {
    rooms: HashMap<RoomId, Room>,
    bookings: HashMap<BookingId, Booking>,
    reviews: Vec<Review>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_room(&self, room: Room) {
        self.lock().rooms.insert(room.room_id, room);
    }

    /// Snapshot of one room, for assertions.
    pub fn room(&self, room_id: RoomId) -> Option<Room> {
        self.lock().rooms.get(&room_id).cloned()
    }

    /// Number of live bookings, for assertions.
    pub fn booking_count(&self) -> usize {
        self.lock().bookings.len()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().expect("memory store lock poisoned")
    }
}

#[derive(Clone, new)]
pub struct InMemoryRoomRepository {
    store: MemoryStore,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_all(&self, options: RoomListOptions) -> AppResult<Vec<Room>> {
        let state = self.store.lock();
        let mut rooms: Vec<Room> = state.rooms.values().cloned().collect();
        if let Some((lower, upper)) = options.price_band() {
            rooms.retain(|room| (lower..=upper).contains(&room.price));
        }
        // Deterministic order for assertions.
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        Ok(self.store.lock().rooms.get(&room_id).cloned())
    }

    async fn update_availability(&self, event: UpdateAvailability) -> AppResult<()> {
        let mut state = self.store.lock();
        let room = state
            .rooms
            .get_mut(&event.room_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("room {} not found", event.room_id)))?;
        room.available = event.available;
        Ok(())
    }
}

#[derive(Clone, new)]
pub struct InMemoryBookingRepository {
    store: MemoryStore,
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut state = self.store.lock();

        {
            let room = state.rooms.get_mut(&event.room_id).ok_or_else(|| {
                AppError::EntityNotFound(format!("room {} not found", event.room_id))
            })?;
            if !room.available {
                return Err(AppError::ResourceConflict(format!(
                    "room {} is already booked",
                    event.room_id
                )));
            }
            room.available = false;
        }

        let booking = Booking {
            booking_id: BookingId::new(),
            room_id: event.room_id,
            user_email: event.user_email,
            booked_date: event.booked_date,
            created_at: Utc::now(),
        };
        state.bookings.insert(booking.booking_id, booking.clone());
        Ok(booking)
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<()> {
        let mut state = self.store.lock();

        let Some(booking) = state.bookings.get(&event.booking_id).cloned() else {
            return Err(AppError::EntityNotFound(format!(
                "booking {} not found",
                event.booking_id
            )));
        };
        if booking.user_email != event.requested_by {
            return Err(AppError::ForbiddenOperation);
        }

        state.bookings.remove(&event.booking_id);
        match state.rooms.get_mut(&booking.room_id) {
            Some(room) => room.available = true,
            None => {
                tracing::error!(
                    room_id = %booking.room_id,
                    booking_id = %event.booking_id,
                    "availability was not restored after cancelling booking"
                );
                return Err(AppError::NoRowsAffectedError(
                    "room availability was not restored".into(),
                ));
            }
        }
        Ok(())
    }

    async fn update_date(&self, event: UpdateBookingDate) -> AppResult<Booking> {
        let mut state = self.store.lock();
        let booking = state.bookings.get_mut(&event.booking_id).ok_or_else(|| {
            AppError::EntityNotFound(format!("booking {} not found", event.booking_id))
        })?;
        if booking.user_email != event.requested_by {
            return Err(AppError::ForbiddenOperation);
        }
        booking.booked_date = event.booked_date;
        Ok(booking.clone())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self.store.lock().bookings.get(&booking_id).cloned())
    }

    async fn find_by_user_email(&self, user_email: &str) -> AppResult<Vec<Booking>> {
        let state = self.store.lock();
        let mut bookings: Vec<Booking> = state
            .bookings
            .values()
            .filter(|booking| booking.user_email == user_email)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(bookings)
    }
}

#[derive(Clone, new)]
pub struct InMemoryReviewRepository {
    store: MemoryStore,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, event: CreateReview) -> AppResult<Review> {
        let mut state = self.store.lock();
        if !state.rooms.contains_key(&event.room_id) {
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
        state.reviews.push(review.clone());
        Ok(review)
    }

    async fn find_all(&self) -> AppResult<Vec<Review>> {
        // Insertion order is creation order, so newest-first is the
        // reverse walk.
        Ok(self.store.lock().reviews.iter().rev().cloned().collect())
    }

    async fn find_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Review>> {
        Ok(self
            .store
            .lock()
            .reviews
            .iter()
            .rev()
            .filter(|review| review.room_id == room_id)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default, new)]
pub struct InMemoryHealthCheckRepository;

#[async_trait]
impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn check_db(&self) -> bool {
        true
    }
}

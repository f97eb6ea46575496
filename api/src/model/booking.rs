use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::booking::event::{CreateBooking, UpdateBookingDate};
use kernel::model::booking::Booking;
use kernel::model::id::{BookingId, RoomId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub date: NaiveDate,
}

/// The owner comes from the verified credential, never from the request
/// body.
#[derive(new)]
pub struct CreateBookingRequestWithOwner(String, CreateBookingRequest);

impl From<CreateBookingRequestWithOwner> for CreateBooking {
    fn from(value: CreateBookingRequestWithOwner) -> Self {
        let CreateBookingRequestWithOwner(user_email, CreateBookingRequest { room_id, date }) =
            value;
        CreateBooking {
            room_id,
            user_email,
            booked_date: date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDateRequest {
    #[garde(skip)]
    pub date_string: NaiveDate,
}

#[derive(new)]
pub struct UpdateBookingDateRequestWithIds(BookingId, String, UpdateBookingDateRequest);

impl From<UpdateBookingDateRequestWithIds> for UpdateBookingDate {
    fn from(value: UpdateBookingDateRequestWithIds) -> Self {
        let UpdateBookingDateRequestWithIds(
            booking_id,
            requested_by,
            UpdateBookingDateRequest { date_string },
        ) = value;
        UpdateBookingDate {
            booking_id,
            requested_by,
            booked_date: date_string,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub user_email: String,
    pub booked_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            room_id,
            user_email,
            booked_date,
            created_at,
        } = value;
        Self {
            booking_id,
            room_id,
            user_email,
            booked_date,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::booking::event::DeleteBooking;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::extractor::AuthorizedUser;
use crate::model::booking::{
    BookingResponse, BookingsResponse, CreateBookingRequest, CreateBookingRequestWithOwner,
    UpdateBookingDateRequest, UpdateBookingDateRequestWithIds,
};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let event = CreateBookingRequestWithOwner::new(user.email().to_string(), req);
    registry
        .booking_repository()
        .create(event.into())
        .await
        .map(BookingResponse::from)
        .map(|body| (StatusCode::CREATED, Json(body)))
}

pub async fn show_user_bookings(
    user: AuthorizedUser,
    Path(email): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    // A credential only opens its own booking list.
    if user.email() != email {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .booking_repository()
        .find_by_user_email(&email)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn update_booking_date(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingDateRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    let event =
        UpdateBookingDateRequestWithIds::new(booking_id, user.email().to_string(), req);
    registry
        .booking_repository()
        .update_date(event.into())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn delete_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let event = DeleteBooking::new(booking_id, user.email().to_string());
    registry
        .booking_repository()
        .delete(event)
        .await
        .map(|_| StatusCode::OK)
}

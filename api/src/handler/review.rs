use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::id::RoomId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::AuthorizedUser;
use crate::model::review::{
    CreateReviewRequest, CreateReviewRequestWithAuthor, ReviewResponse, ReviewsResponse,
};

pub async fn register_review(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    req.validate(&())?;

    let event = CreateReviewRequestWithAuthor::new(user.email().to_string(), req);
    registry
        .review_repository()
        .create(event.into())
        .await
        .map(ReviewResponse::from)
        .map(|body| (StatusCode::CREATED, Json(body)))
}

pub async fn show_review_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    registry
        .review_repository()
        .find_all()
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

pub async fn show_room_reviews(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    registry
        .review_repository()
        .find_by_room_id(room_id)
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

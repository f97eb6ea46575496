use std::sync::Arc;

use adapter::auth::JwtAuthProvider;
use adapter::memory::{
    InMemoryBookingRepository, InMemoryHealthCheckRepository, InMemoryReviewRepository,
    InMemoryRoomRepository, MemoryStore,
};
use api::route::auth::build_auth_routers;
use api::route::booking::build_booking_routers;
use api::route::health::build_health_check_routers;
use api::route::review::build_review_routers;
use api::route::room::build_room_routers;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use kernel::model::id::RoomId;
use kernel::model::room::Room;
use registry::AppRegistry;
use serde_json::{json, Value};
use shared::config::AuthConfig;
use shared::env::Environment;
use tower::ServiceExt;

fn build_app() -> (Router, MemoryStore, RoomId) {
    let store = MemoryStore::new();
    let room_id = RoomId::new();
    store.seed_room(Room {
        room_id,
        name: "Seaside Suite".into(),
        description: "Two beds, ocean view".into(),
        image_url: "https://example.com/seaside.jpg".into(),
        price: 100,
        available: true,
    });

    let registry = AppRegistry::from_parts(
        Arc::new(InMemoryHealthCheckRepository::new()),
        Arc::new(InMemoryRoomRepository::new(store.clone())),
        Arc::new(InMemoryBookingRepository::new(store.clone())),
        Arc::new(InMemoryReviewRepository::new(store.clone())),
        Arc::new(JwtAuthProvider::new(&AuthConfig {
            token_secret: "router-test-secret".into(),
            token_ttl: 3600,
        })),
        Environment::Development,
    );

    let app = Router::new()
        .merge(build_health_check_routers())
        .merge(build_room_routers())
        .merge(build_booking_routers())
        .merge(build_review_routers())
        .merge(build_auth_routers())
        .with_state(registry);

    (app, store, room_id)
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Logs in and returns the `access_token=...` cookie pair to present on
/// subsequent requests.
async fn login(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/jwt", None, json!({ "email": email })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the credential cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoints_respond() {
    let (app, _, _) = build_app();
    let (status, _) = call(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, get("/health/db")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn room_listing_is_public_and_price_filtered() {
    let (app, store, _) = build_app();
    for (name, price) in [("Budget Bunk", 40), ("Penthouse", 200)] {
        store.seed_room(Room {
            room_id: RoomId::new(),
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            price,
            available: true,
        });
    }

    let (status, body) = call(&app, get("/rooms")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);

    let (status, body) = call(&app, get("/rooms?minRange=50&maxRange=150")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["price"], 100);

    let (status, body) = call(&app, get("/rooms?minRange=0&maxRange=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_room_is_not_found() {
    let (app, _, _) = build_app();
    let (status, _) = call(&app, get(&format!("/rooms/{}", RoomId::new()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_requires_a_credential() {
    let (app, _, room_id) = build_app();
    let (status, _) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            None,
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            Some("access_token=tampered-garbage"),
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn booking_lifecycle_round_trip() {
    let (app, store, room_id) = build_app();
    let cookie = login(&app, "a@x.com").await;

    // Book the room.
    let (status, body) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            Some(&cookie),
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userEmail"], "a@x.com");
    assert_eq!(body["bookedDate"], "2024-01-01");
    let booking_id = body["bookingId"].as_str().unwrap().to_string();
    assert!(!store.room(room_id).unwrap().available);

    // A second attempt on the same room is a conflict.
    let (status, _) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            Some(&cookie),
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(store.booking_count(), 1);

    // Cancelling restores availability.
    let (status, _) = call(
        &app,
        json_request(
            "DELETE",
            &format!("/bookings/{booking_id}"),
            Some(&cookie),
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(store.room(room_id).unwrap().available);

    // Replaying the cancellation finds nothing.
    let (status, _) = call(
        &app,
        json_request(
            "DELETE",
            &format!("/bookings/{booking_id}"),
            Some(&cookie),
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_list_is_owner_scoped() {
    let (app, _, room_id) = build_app();
    let cookie = login(&app, "a@x.com").await;

    let (status, _) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            Some(&cookie),
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(
        &app,
        json_request("GET", "/bookings/a@x.com", Some(&cookie), Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // Someone else's list stays closed.
    let (status, _) = call(
        &app,
        json_request("GET", "/bookings/b@x.com", Some(&cookie), Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cancelling_someone_elses_booking_is_forbidden() {
    let (app, store, room_id) = build_app();
    let owner_cookie = login(&app, "a@x.com").await;
    let intruder_cookie = login(&app, "b@x.com").await;

    let (_, body) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            Some(&owner_cookie),
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    let booking_id = body["bookingId"].as_str().unwrap().to_string();

    let (status, _) = call(
        &app,
        json_request(
            "DELETE",
            &format!("/bookings/{booking_id}"),
            Some(&intruder_cookie),
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(!store.room(room_id).unwrap().available);
    assert_eq!(store.booking_count(), 1);
}

#[tokio::test]
async fn rescheduling_changes_only_the_date() {
    let (app, store, room_id) = build_app();
    let cookie = login(&app, "a@x.com").await;

    let (_, body) = call(
        &app,
        json_request(
            "POST",
            "/bookings",
            Some(&cookie),
            json!({ "roomId": room_id, "date": "2024-01-01" }),
        ),
    )
    .await;
    let booking_id = body["bookingId"].as_str().unwrap().to_string();

    let (status, body) = call(
        &app,
        json_request(
            "PATCH",
            &format!("/bookings/{booking_id}"),
            Some(&cookie),
            json!({ "dateString": "2024-02-02" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookedDate"], "2024-02-02");
    assert_eq!(body["userEmail"], "a@x.com");
    assert!(!store.room(room_id).unwrap().available);
}

#[tokio::test]
async fn manual_availability_toggle_is_applied_directly() {
    let (app, store, room_id) = build_app();
    let cookie = login(&app, "a@x.com").await;

    let (status, _) = call(
        &app,
        json_request(
            "PATCH",
            &format!("/rooms/{room_id}"),
            Some(&cookie),
            json!({ "booking": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!store.room(room_id).unwrap().available);

    // Repeating the same write is still a success.
    let (status, _) = call(
        &app,
        json_request(
            "PATCH",
            &format!("/rooms/{room_id}"),
            Some(&cookie),
            json!({ "booking": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        json_request(
            "PATCH",
            &format!("/rooms/{room_id}"),
            Some(&cookie),
            json!({ "booking": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(store.room(room_id).unwrap().available);
}

#[tokio::test]
async fn reviews_are_posted_with_credentials_and_read_without() {
    let (app, _, room_id) = build_app();
    let cookie = login(&app, "a@x.com").await;

    let (status, _) = call(
        &app,
        json_request(
            "POST",
            "/reviews",
            None,
            json!({ "roomId": room_id, "rating": 5, "comment": "lovely" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    for comment in ["first stay", "second stay"] {
        let (status, body) = call(
            &app,
            json_request(
                "POST",
                "/reviews",
                Some(&cookie),
                json!({ "roomId": room_id, "rating": 4, "comment": comment }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["userEmail"], "a@x.com");
    }

    let (status, body) = call(&app, get("/reviews")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["comment"], "second stay");

    let (status, body) = call(&app, get(&format!("/reviews/{room_id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let (status, _) = call(
        &app,
        json_request(
            "POST",
            "/reviews",
            Some(&cookie),
            json!({ "roomId": room_id, "rating": 11, "comment": "out of range" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_rejects_a_malformed_email() {
    let (app, _, _) = build_app();
    let (status, _) = call(
        &app,
        json_request("POST", "/jwt", None, json!({ "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_the_credential_cookie() {
    let (app, _, _) = build_app();
    let response = app.clone().oneshot(get("/logout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("access_token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

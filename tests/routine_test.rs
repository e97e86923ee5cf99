mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

fn form_post(uri: &str, day: &str, exercise: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            serde_urlencoded::to_string([("day", day), ("exercise", exercise)]).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_routine_requires_auth() {
    let app = common::create_test_app();

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/routine")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/auth/login");
}

#[tokio::test]
async fn test_routine_page_shows_days() {
    let app = common::create_test_app();
    common::login_test_user(&app, "ana").await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/routine")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    for day in ["Día 1", "Día 2", "Día 3", "Día 4", "Día 5"] {
        assert!(body.contains(day));
    }
    assert!(body.contains("Triceps Pushdown"));
}

#[tokio::test]
async fn test_add_exercise() {
    let app = common::create_test_app();
    common::login_test_user(&app, "ana").await;

    let response = app
        .router
        .clone()
        .oneshot(form_post("/routine/exercises", "Día 2", "Nordic Curl"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Added Nordic Curl to Día 2"));

    let exercises = app.routine_repo().list_exercises("ana", "Día 2").await.unwrap();
    assert_eq!(exercises.last().map(String::as_str), Some("Nordic Curl"));
}

#[tokio::test]
async fn test_add_exercise_to_new_day() {
    let app = common::create_test_app();
    common::login_test_user(&app, "ana").await;

    app.router
        .clone()
        .oneshot(form_post("/routine/exercises", "Día 6", "Plank"))
        .await
        .unwrap();

    let days = app.routine_repo().list_days("ana").await.unwrap();
    assert_eq!(days.last().map(String::as_str), Some("Día 6"));
}

#[tokio::test]
async fn test_add_blank_exercise_shows_error() {
    let app = common::create_test_app();
    common::login_test_user(&app, "ana").await;
    let before = app.routines.load().unwrap().len();

    let response = app
        .router
        .clone()
        .oneshot(form_post("/routine/exercises", "Día 1", "   "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response)
        .await
        .contains("Day and exercise name are required"));
    assert_eq!(app.routines.load().unwrap().len(), before);
}

#[tokio::test]
async fn test_remove_exercise() {
    let app = common::create_test_app();
    common::login_test_user(&app, "ana").await;

    let response = app
        .router
        .clone()
        .oneshot(form_post(
            "/routine/exercises/remove",
            "Día 1",
            "Chest Fly (Machine)",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let exercises = app.routine_repo().list_exercises("ana", "Día 1").await.unwrap();
    assert_eq!(exercises.len(), 6);
    assert!(!exercises.contains(&"Chest Fly (Machine)".to_string()));
}

#[tokio::test]
async fn test_routine_edits_do_not_touch_other_users() {
    let app = common::create_test_app();
    app.routine_repo().ensure_seeded("luis").await.unwrap();
    common::login_test_user(&app, "ana").await;

    app.router
        .clone()
        .oneshot(form_post("/routine/exercises/remove", "Día 1", "Triceps Pushdown"))
        .await
        .unwrap();

    let luis = app.routine_repo().list_exercises("luis", "Día 1").await.unwrap();
    assert!(luis.contains(&"Triceps Pushdown".to_string()));
}

//! HTTP-level integration tests for enrollment rules: capacity, duplicate
//! prevention, start-date checks, and the unenrollment lead-time policy.

mod common;

use axum::http::StatusCode;
use campus_core::policy::UnenrollPolicy;
use common::{body_json, delete, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_enroll_student_returns_201_with_enrollment_date(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 30).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["student_id"], student_id);
    assert_eq!(json["course_id"], course_id);
    assert!(json["enrollment_date"].is_string());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_enroll_unknown_student_returns_404(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 30).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": 999999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_enroll_in_unknown_course_returns_404(pool: PgPool) {
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/courses/999999/enrollments",
        serde_json::json!({ "student_id": student_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_enroll_twice_returns_409(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 30).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // A repeat call is an error, not a no-op.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_enroll_beyond_capacity_returns_409(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 1, 30).await;
    let first = common::seed_student(&pool, "ada@example.edu", "S-1001").await;
    let second = common::seed_student(&pool, "alan@example.edu", "S-2002").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": first }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": second }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{course_id}/availability")).await;
    let json = body_json(response).await;
    assert_eq!(json["can_enroll"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_enroll_in_started_course_returns_409(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    // The API refuses to create courses in the past, so seed one directly.
    let course_id: i64 = sqlx::query_scalar(
        "INSERT INTO courses (title, lecturer_id, max_participants, start_date, end_date)
         VALUES ('Already running', $1, 10, NOW() - INTERVAL '1 day', NOW() + INTERVAL '60 days')
         RETURNING id",
    )
    .bind(lecturer_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unenroll_nonexistent_pair_returns_404(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 30).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unenroll_with_enough_lead_time_succeeds(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 30).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["enrolled"], false);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unenroll_inside_lead_window_returns_409(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    // Starts in 3 days, inside the default 7-day window.
    let course_id = common::seed_course(&pool, lecturer_id, 10, 3).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unenroll_with_disabled_policy_ignores_lead_time(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 3).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;

    let app = common::build_test_app_with_policy(pool, UnenrollPolicy::disabled());
    let response = delete(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_enrollment_status_reflects_membership(pool: PgPool) {
    let lecturer_id = common::seed_lecturer(&pool, "hopper@example.edu").await;
    let course_id = common::seed_course(&pool, lecturer_id, 10, 30).await;
    let student_id = common::seed_student(&pool, "ada@example.edu", "S-1001").await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["enrolled"], false);

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments"),
        serde_json::json!({ "student_id": student_id }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/courses/{course_id}/enrollments/{student_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["enrolled"], true);

    // The course roster sees it too.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{course_id}/enrollments")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_availability_for_unknown_course_is_false(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/999999/availability").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["can_enroll"], false);
}

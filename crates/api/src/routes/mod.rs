pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{course, enrollment, lecturer, student};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /students                                GET list, POST create
/// /students/search?email=                  GET by email
/// /students/{id}                           GET, PUT, DELETE
/// /students/{id}/enrollments               GET
///
/// /lecturers[?department=]                 GET list, POST create
/// /lecturers/{id}                          GET, PUT, DELETE
/// /lecturers/{id}/courses                  GET
///
/// /courses                                 GET list, POST create
/// /courses/available                       GET
/// /courses/{id}                            GET, PUT, DELETE
/// /courses/{id}/availability               GET
/// /courses/{id}/enrollments                GET list, POST enroll
/// /courses/{id}/enrollments/{student_id}   GET status, DELETE unenroll
/// ```
pub fn api_routes() -> Router<AppState> {
    let student_routes = Router::new()
        .route("/", get(student::list).post(student::create))
        .route("/search", get(student::search))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
        .route("/{id}/enrollments", get(student::enrollments));

    let lecturer_routes = Router::new()
        .route("/", get(lecturer::list).post(lecturer::create))
        .route(
            "/{id}",
            get(lecturer::get_by_id)
                .put(lecturer::update)
                .delete(lecturer::delete),
        )
        .route("/{id}/courses", get(lecturer::courses));

    let course_routes = Router::new()
        .route("/", get(course::list).post(course::create))
        .route("/available", get(course::available))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .route("/{id}/availability", get(enrollment::availability))
        .route(
            "/{id}/enrollments",
            get(enrollment::list_for_course).post(enrollment::enroll),
        )
        .route(
            "/{id}/enrollments/{student_id}",
            get(enrollment::status).delete(enrollment::unenroll),
        );

    Router::new()
        .nest("/students", student_routes)
        .nest("/lecturers", lecturer_routes)
        .nest("/courses", course_routes)
}

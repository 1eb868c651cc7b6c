use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::student::{
        create_student, delete_student, get_active_students_with_min_gpa, get_statistics,
        get_student_by_email, get_student_by_id, get_students, get_students_by_major,
        get_students_by_major_and_status, get_students_by_status, get_students_with_min_gpa,
        health, search_students, update_student,
    },
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(get_students).post(create_student))
        .route("/api/students/health", get(health))
        .route("/api/students/statistics", get(get_statistics))
        .route("/api/students/search", get(search_students))
        .route("/api/students/gpa", get(get_students_with_min_gpa))
        .route(
            "/api/students/active/high-gpa",
            get(get_active_students_with_min_gpa),
        )
        .route("/api/students/email/{email}", get(get_student_by_email))
        .route("/api/students/status/{status}", get(get_students_by_status))
        .route("/api/students/major/{major}", get(get_students_by_major))
        .route(
            "/api/students/major/{major}/status/{status}",
            get(get_students_by_major_and_status),
        )
        .route(
            "/api/students/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

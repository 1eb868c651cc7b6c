//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the `#[utoipa::path]` annotations on the student handlers
//! and the DTO schemas they reference. The router serves the generated document
//! at `/api-docs/openapi.json` behind Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::model::{
    api::ErrorDto,
    student::{CreateStudentDto, StudentDto, StudentStatisticsDto, StudentStatusDto, UpdateStudentDto},
};

/// OpenAPI document for the student REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Management API",
        description = "CRUD and query endpoints for student records."
    ),
    paths(
        crate::server::controller::student::get_students,
        crate::server::controller::student::get_student_by_id,
        crate::server::controller::student::get_student_by_email,
        crate::server::controller::student::create_student,
        crate::server::controller::student::update_student,
        crate::server::controller::student::delete_student,
        crate::server::controller::student::get_students_by_status,
        crate::server::controller::student::get_students_by_major,
        crate::server::controller::student::get_students_by_major_and_status,
        crate::server::controller::student::search_students,
        crate::server::controller::student::get_students_with_min_gpa,
        crate::server::controller::student::get_active_students_with_min_gpa,
        crate::server::controller::student::get_statistics,
        crate::server::controller::student::health,
    ),
    components(schemas(
        StudentDto,
        StudentStatusDto,
        CreateStudentDto,
        UpdateStudentDto,
        StudentStatisticsDto,
        ErrorDto,
    )),
    tags(
        (name = "student", description = "Student record management")
    )
)]
pub struct ApiDoc;

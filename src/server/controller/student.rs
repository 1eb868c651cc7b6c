use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{
            CreateStudentDto, MinGpaQuery, NameSearchQuery, StudentDto, StudentStatisticsDto,
            StudentStatusDto, UpdateStudentDto,
        },
    },
    server::{
        error::{student::StudentError, AppError},
        model::student::{CreateStudentParams, Student, StudentStatus, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Text returned by the health endpoint.
pub static HEALTH_MESSAGE: &str = "Student Management API is running!";

fn into_dtos(students: Vec<Student>) -> Vec<StudentDto> {
    students.into_iter().map(Student::into_dto).collect()
}

/// Get all students.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All students ordered by id (empty list if none)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Get a student by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student id
///
/// # Returns
/// - `200 OK` - The student
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .get_by_id(id)
        .await?
        .ok_or(StudentError::NotFound(id))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Get a student by email.
///
/// The email must match exactly.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `email` - Student email address
///
/// # Returns
/// - `200 OK` - The student
/// - `404 Not Found` - No student with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/email/{email}",
    tag = STUDENT_TAG,
    params(
        ("email" = String, Path, description = "Student email address")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .get_by_email(&email)
        .await?
        .ok_or(StudentError::EmailNotFound(email))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a new student.
///
/// Rejects the request without inserting anything when the email is already in use.
/// A missing enrollment date defaults to today and a missing status to `ACTIVE`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student creation data
///
/// # Returns
/// - `201 Created` - The created student with its assigned id
/// - `400 Bad Request` - Email already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    if service.email_exists(&payload.email).await? {
        return Err(StudentError::DuplicateEmail(payload.email).into());
    }

    let student = service.create(CreateStudentParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// Replace a student's fields.
///
/// Every field in the body overwrites the stored value; omitted optional fields are
/// cleared. The enrollment date is kept.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student id
/// - `payload` - Replacement field values
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - Email belongs to another student
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Email belongs to another student", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .update(UpdateStudentParams::from_dto(id, payload))
        .await?
        .ok_or(StudentError::NotFound(id))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student id
///
/// # Returns
/// - `204 No Content` - Student deleted
/// - `404 Not Found` - No student with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    if !service.delete(id).await? {
        return Err(StudentError::NotFound(id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get students with the given status.
#[utoipa::path(
    get,
    path = "/api/students/status/{status}",
    tag = STUDENT_TAG,
    params(
        ("status" = StudentStatusDto, Path, description = "ACTIVE, INACTIVE or GRADUATED")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_status(
    State(state): State<AppState>,
    Path(status): Path<StudentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service
        .get_by_status(StudentStatus::from_dto(status))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Get students in the given major.
#[utoipa::path(
    get,
    path = "/api/students/major/{major}",
    tag = STUDENT_TAG,
    params(
        ("major" = String, Path, description = "Exact major name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_major(
    State(state): State<AppState>,
    Path(major): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_by_major(&major).await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Get students in the given major that also have the given status.
#[utoipa::path(
    get,
    path = "/api/students/major/{major}/status/{status}",
    tag = STUDENT_TAG,
    params(
        ("major" = String, Path, description = "Exact major name"),
        ("status" = StudentStatusDto, Path, description = "ACTIVE, INACTIVE or GRADUATED")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_by_major_and_status(
    State(state): State<AppState>,
    Path((major, status)): Path<(String, StudentStatusDto)>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service
        .get_by_major_and_status(&major, StudentStatus::from_dto(status))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Search students by name.
///
/// Matches a case-insensitive substring of either the first or the last name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Search term
///
/// # Returns
/// - `200 OK` - Matching students (empty list if none)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/search",
    tag = STUDENT_TAG,
    params(NameSearchQuery),
    responses(
        (status = 200, description = "Successfully searched students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    Query(query): Query<NameSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.search_by_name(&query.name).await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Get students with a GPA of at least `minGpa`.
///
/// Students without a GPA are never included.
#[utoipa::path(
    get,
    path = "/api/students/gpa",
    tag = STUDENT_TAG,
    params(MinGpaQuery),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students_with_min_gpa(
    State(state): State<AppState>,
    Query(query): Query<MinGpaQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_with_min_gpa(query.min_gpa).await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Get active students with a GPA of at least `minGpa`, highest GPA first.
#[utoipa::path(
    get,
    path = "/api/students/active/high-gpa",
    tag = STUDENT_TAG,
    params(MinGpaQuery),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_students_with_min_gpa(
    State(state): State<AppState>,
    Query(query): Query<MinGpaQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_active_with_min_gpa(query.min_gpa).await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Get total and per-status student counts.
///
/// # Returns
/// - `200 OK` - Counts computed from the current records
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/statistics",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully computed statistics", body = StudentStatisticsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let statistics = service.get_statistics().await?;

    Ok((StatusCode::OK, Json(statistics.into_dto())))
}

/// Liveness check.
///
/// Does not touch the database.
#[utoipa::path(
    get,
    path = "/api/students/health",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_MESSAGE)
}

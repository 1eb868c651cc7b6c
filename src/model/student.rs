use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Lifecycle status of a student as it appears on the wire.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum StudentStatusDto {
    Active,
    Inactive,
    Graduated,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatusDto,
}

/// Request body for creating a student.
///
/// `enrollmentDate` and `status` are optional; the server fills in today's
/// date and `ACTIVE` when they are left out.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<StudentStatusDto>,
}

/// Request body for replacing a student's mutable fields.
///
/// Every field is written as given: an omitted optional field clears the
/// stored value. The enrollment date cannot be changed after creation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub status: StudentStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatisticsDto {
    pub total_students: u64,
    pub active_students: u64,
    pub inactive_students: u64,
    pub graduated_students: u64,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameSearchQuery {
    /// Case-insensitive substring matched against first and last name
    pub name: String,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct MinGpaQuery {
    /// Inclusive lower GPA bound
    pub min_gpa: f64,
}

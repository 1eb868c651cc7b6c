//! Student domain models and parameters.
//!
//! Provides the domain model for student records and the parameter types for
//! creating and replacing them. Entity models are converted at the repository
//! boundary and DTOs at the controller boundary.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::StudentStatus as StudentStatusEntity;

use crate::model::student::{
    CreateStudentDto, StudentDto, StudentStatisticsDto, StudentStatusDto, UpdateStudentDto,
};

/// Lifecycle status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentStatus {
    Active,
    Inactive,
    Graduated,
}

impl StudentStatus {
    pub fn from_dto(dto: StudentStatusDto) -> Self {
        match dto {
            StudentStatusDto::Active => Self::Active,
            StudentStatusDto::Inactive => Self::Inactive,
            StudentStatusDto::Graduated => Self::Graduated,
        }
    }

    pub fn into_dto(self) -> StudentStatusDto {
        match self {
            Self::Active => StudentStatusDto::Active,
            Self::Inactive => StudentStatusDto::Inactive,
            Self::Graduated => StudentStatusDto::Graduated,
        }
    }

    pub fn from_entity(entity: StudentStatusEntity) -> Self {
        match entity {
            StudentStatusEntity::Active => Self::Active,
            StudentStatusEntity::Inactive => Self::Inactive,
            StudentStatusEntity::Graduated => Self::Graduated,
        }
    }

    pub fn into_entity(self) -> StudentStatusEntity {
        match self {
            Self::Active => StudentStatusEntity::Active,
            Self::Inactive => StudentStatusEntity::Inactive,
            Self::Graduated => StudentStatusEntity::Graduated,
        }
    }
}

/// A stored student record.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// System-assigned identifier, never reused.
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all students.
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatus,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
            major: self.major,
            gpa: self.gpa,
            enrollment_date: self.enrollment_date,
            status: self.status.into_dto(),
        }
    }

    /// Converts an entity model to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Student` - The converted student domain model
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            date_of_birth: entity.date_of_birth,
            address: entity.address,
            major: entity.major,
            gpa: entity.gpa,
            enrollment_date: entity.enrollment_date,
            status: StudentStatus::from_entity(entity.status),
        }
    }
}

/// Parameters for creating a student.
///
/// `enrollment_date` and `status` are optional here; the service resolves them
/// to concrete values with [`CreateStudentParams::with_defaults`] before the
/// record reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<StudentStatus>,
}

impl CreateStudentParams {
    /// Converts a creation DTO into parameters.
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            date_of_birth: dto.date_of_birth,
            address: dto.address,
            major: dto.major,
            gpa: dto.gpa,
            enrollment_date: dto.enrollment_date,
            status: dto.status.map(StudentStatus::from_dto),
        }
    }

    /// Fills in the creation defaults.
    ///
    /// A missing enrollment date becomes `today`; a missing status becomes
    /// `Active`. Values supplied by the caller are kept.
    ///
    /// # Arguments
    /// - `today` - Date to use as the enrollment date when none was supplied
    ///
    /// # Returns
    /// - `NewStudentParams` - Parameters with every required column resolved
    pub fn with_defaults(self, today: NaiveDate) -> NewStudentParams {
        NewStudentParams {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
            major: self.major,
            gpa: self.gpa,
            enrollment_date: self.enrollment_date.unwrap_or(today),
            status: self.status.unwrap_or(StudentStatus::Active),
        }
    }
}

/// Fully resolved parameters for inserting a student row.
#[derive(Debug, Clone)]
pub struct NewStudentParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub enrollment_date: NaiveDate,
    pub status: StudentStatus,
}

/// Parameters for replacing a student's mutable fields.
///
/// Full-overwrite semantics: every field below is written to the record as
/// given, so `None` clears the stored value. The enrollment date and id are
/// never changed by an update.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub status: StudentStatus,
}

impl UpdateStudentParams {
    /// Converts an update DTO into parameters for the student with `id`.
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            date_of_birth: dto.date_of_birth,
            address: dto.address,
            major: dto.major,
            gpa: dto.gpa,
            status: StudentStatus::from_dto(dto.status),
        }
    }
}

/// Aggregate counts over the current set of students.
///
/// Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentStatistics {
    pub total_students: u64,
    pub active_students: u64,
    pub inactive_students: u64,
    pub graduated_students: u64,
}

impl StudentStatistics {
    pub fn into_dto(self) -> StudentStatisticsDto {
        StudentStatisticsDto {
            total_students: self.total_students,
            active_students: self.active_students,
            inactive_students: self.inactive_students,
            graduated_students: self.graduated_students,
        }
    }
}

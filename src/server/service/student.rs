//! Student service for business logic.
//!
//! This module provides the `StudentService`, which applies creation defaults,
//! performs full-overwrite updates, aggregates statistics and passes the filtered
//! lookups through to the repository. It works with domain models rather than DTOs.

use chrono::Local;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::student::StudentRepository,
    error::{student::StudentError, AppError},
    model::student::{
        CreateStudentParams, Student, StudentStatistics, StudentStatus, UpdateStudentParams,
    },
};

/// Service providing business logic for student records.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new StudentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all students.
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a student by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Gets a student by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_email(email).await?)
    }

    /// Creates a new student.
    ///
    /// Fills in today's local date when no enrollment date is given and `Active` when
    /// no status is given, then inserts the record. Email uniqueness is not checked
    /// up front here; callers that want an early rejection use [`Self::email_exists`].
    /// If the storage unique index rejects the email anyway, the violation is reported
    /// as `StudentError::DuplicateEmail`.
    ///
    /// # Arguments
    /// - `params` - Fields for the new student
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its assigned id
    /// - `Err(AppError::StudentErr(DuplicateEmail))` - Email already in use
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        let email = params.email.clone();
        let params = params.with_defaults(Local::now().date_naive());

        let student = repo
            .create(params)
            .await
            .map_err(|e| map_unique_violation(e, &email))?;

        tracing::info!("Created student {} ({})", student.id, student.email);

        Ok(student)
    }

    /// Replaces every mutable field of an existing student.
    ///
    /// No partial update: fields absent from `params` are cleared. Returns `None`
    /// without writing anything when the student doesn't exist.
    ///
    /// # Arguments
    /// - `params` - Target id and replacement values
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that id
    /// - `Err(AppError::StudentErr(DuplicateEmail))` - New email belongs to another student
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        let email = params.email.clone();
        let student = repo
            .update(params)
            .await
            .map_err(|e| map_unique_violation(e, &email))?;

        if let Some(ref student) = student {
            tracing::info!("Updated student {}", student.id);
        }

        Ok(student)
    }

    /// Deletes a student.
    /// Returns true if deleted, false if no student had that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::info!("Deleted student {}", id);
        }

        Ok(deleted)
    }

    /// Gets students with the given status.
    pub async fn get_by_status(&self, status: StudentStatus) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_status(status).await?)
    }

    /// Gets students in the given major.
    pub async fn get_by_major(&self, major: &str) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_major(major).await?)
    }

    /// Gets students in the given major that also have the given status.
    pub async fn get_by_major_and_status(
        &self,
        major: &str,
        status: StudentStatus,
    ) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_major_and_status(major, status).await?)
    }

    /// Searches students by a case-insensitive substring of their first or last name.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.search_by_name(name).await?)
    }

    /// Gets students with a GPA of at least `min_gpa`.
    pub async fn get_with_min_gpa(&self, min_gpa: f64) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_min_gpa(min_gpa).await?)
    }

    /// Gets active students with a GPA of at least `min_gpa`, highest GPA first.
    pub async fn get_active_with_min_gpa(&self, min_gpa: f64) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_active_by_min_gpa(min_gpa).await?)
    }

    /// Checks whether a student already uses `email`.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.exists_by_email(email).await?)
    }

    /// Computes total and per-status student counts.
    ///
    /// Counts are queried fresh on every call; nothing is cached.
    pub async fn get_statistics(&self) -> Result<StudentStatistics, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(StudentStatistics {
            total_students: repo.count().await?,
            active_students: repo.count_by_status(StudentStatus::Active).await?,
            inactive_students: repo.count_by_status(StudentStatus::Inactive).await?,
            graduated_students: repo.count_by_status(StudentStatus::Graduated).await?,
        })
    }
}

/// Maps a unique constraint violation to `DuplicateEmail`; other errors pass through.
///
/// Email is the only unique column besides the primary key, so any unique violation
/// on a student write is an email collision.
fn map_unique_violation(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::warn!("Rejected duplicate student email {}", email);
            StudentError::DuplicateEmail(email.to_string()).into()
        }
        _ => err.into(),
    }
}

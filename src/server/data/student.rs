//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records in the
//! database. It handles inserts, full-overwrite updates, deletes, the filtered lookups
//! used by the API, and the per-status counts behind the statistics endpoint. Entity
//! models are converted to domain models before leaving this module.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{
    NewStudentParams, Student, StudentStatus, UpdateStudentParams,
};

/// Repository providing database operations for student records.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, deleting and counting students.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student.
    ///
    /// The id is assigned by the database. Fails with a unique constraint violation
    /// when another student already has the same email.
    ///
    /// # Arguments
    /// - `params` - Fully resolved student fields
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student including its assigned id
    /// - `Err(DbErr)` - Database error, including email uniqueness violations
    pub async fn create(&self, params: NewStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            date_of_birth: ActiveValue::Set(params.date_of_birth),
            address: ActiveValue::Set(params.address),
            major: ActiveValue::Set(params.major),
            gpa: ActiveValue::Set(params.gpa),
            enrollment_date: ActiveValue::Set(params.enrollment_date),
            status: ActiveValue::Set(params.status.into_entity()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Finds a student by id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student by exact email.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets all students ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets all students with the given status, ordered by id.
    pub async fn find_by_status(&self, status: StudentStatus) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Status.eq(status.into_entity()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets all students whose major equals `major` exactly, ordered by id.
    pub async fn find_by_major(&self, major: &str) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Major.eq(major))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets all students in `major` that also have `status`, ordered by id.
    pub async fn find_by_major_and_status(
        &self,
        major: &str,
        status: StudentStatus,
    ) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Major.eq(major))
            .filter(entity::student::Column::Status.eq(status.into_entity()))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Searches students by a case-insensitive substring of their first or last name.
    ///
    /// SQLite's `lower()` and `LIKE` only fold ASCII letters, so matching happens
    /// here on Unicode-lowercased values instead of in the query. The search term
    /// is matched literally.
    ///
    /// # Arguments
    /// - `name` - Substring to search for
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Matching students ordered by id (empty if none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Student>, DbErr> {
        let needle = name.to_lowercase();

        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|e| {
                name_contains(&e.first_name, &needle) || name_contains(&e.last_name, &needle)
            })
            .map(Student::from_entity)
            .collect())
    }

    /// Gets all students with a GPA of at least `min_gpa`, ordered by id.
    ///
    /// Students without a GPA never match.
    pub async fn find_by_min_gpa(&self, min_gpa: f64) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Gpa.gte(min_gpa))
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets active students with a GPA of at least `min_gpa`, highest GPA first.
    pub async fn find_active_by_min_gpa(&self, min_gpa: f64) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .filter(entity::student::Column::Status.eq(StudentStatus::Active.into_entity()))
            .filter(entity::student::Column::Gpa.gte(min_gpa))
            .order_by_desc(entity::student::Column::Gpa)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Checks whether any student uses `email`.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all students.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    /// Counts students with the given status.
    pub async fn count_by_status(&self, status: StudentStatus) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Status.eq(status.into_entity()))
            .count(self.db)
            .await
    }

    /// Overwrites every mutable field of an existing student.
    ///
    /// The enrollment date and id are left untouched; all other columns are set to
    /// the values in `params`, including `None` for cleared optional fields.
    ///
    /// # Arguments
    /// - `params` - Target id and the replacement field values
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that id, or it was deleted before the write
    /// - `Err(DbErr)` - Database error, including email uniqueness violations
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, DbErr> {
        let Some(existing) = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student::ActiveModel = existing.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.date_of_birth = ActiveValue::Set(params.date_of_birth);
        active_model.address = ActiveValue::Set(params.address);
        active_model.major = ActiveValue::Set(params.major);
        active_model.gpa = ActiveValue::Set(params.gpa);
        active_model.status = ActiveValue::Set(params.status.into_entity());

        updated_student(active_model.update(self.db).await)
    }

    /// Deletes a student by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A student existed and was removed
    /// - `Ok(false)` - No student with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Checks whether `name` contains `needle`, which must already be lower-cased.
fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// Maps the outcome of an `ActiveModel::update` to the repository result.
///
/// `RecordNotUpdated` means the row vanished between the lookup and the write,
/// which is reported the same as an unknown id.
fn updated_student(
    result: Result<entity::student::Model, DbErr>,
) -> Result<Option<Student>, DbErr> {
    match result {
        Ok(entity) => Ok(Some(Student::from_entity(entity))),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(err),
    }
}

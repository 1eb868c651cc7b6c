//! Student factory for creating test student entities.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::StudentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .first_name("Anna")
///     .last_name("Logan")
///     .major("Physics")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    date_of_birth: Option<NaiveDate>,
    address: Option<String>,
    major: Option<String>,
    gpa: Option<f64>,
    enrollment_date: NaiveDate,
    status: StudentStatus,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Student"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - email: `"student{id}@example.com"`
    /// - enrollment_date: 2024-09-01
    /// - status: `Active`
    /// - all optional fields: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Student".to_string(),
            last_name: id.to_string(),
            email: format!("student{}@example.com", id),
            phone: None,
            date_of_birth: None,
            address: None,
            major: None,
            gpa: None,
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1)
                .expect("valid default enrollment date"),
            status: StudentStatus::Active,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn enrollment_date(mut self, enrollment_date: NaiveDate) -> Self {
        self.enrollment_date = enrollment_date;
        self
    }

    pub fn status(mut self, status: StudentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            address: ActiveValue::Set(self.address),
            major: ActiveValue::Set(self.major),
            gpa: ActiveValue::Set(self.gpa),
            enrollment_date: ActiveValue::Set(self.enrollment_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student with a specific status.
pub async fn create_student_with_status(
    db: &DatabaseConnection,
    status: StudentStatus,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).status(status).build().await
}

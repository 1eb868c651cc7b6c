//! Factory methods for creating test data.
//!
//! Factories insert rows directly through SeaORM active models with sensible defaults,
//! bypassing the service layer so tests can arrange state without exercising the code
//! under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::student::create_student(&db).await?;
//!
//! let graduate = factory::student::StudentFactory::new(&db)
//!     .first_name("Anna")
//!     .status(StudentStatus::Graduated)
//!     .gpa(3.9)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod student;

pub use student::create_student;

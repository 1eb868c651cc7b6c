//! Service layer for business logic.
//!
//! Services sit between the controller layer and the data layer and work with
//! domain models rather than DTOs or entity models.

pub mod student;

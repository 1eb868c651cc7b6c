//! `SeaORM` entities for the student management database.

pub mod prelude;

pub mod sea_orm_active_enums;
pub mod student;

//! `SeaORM` Entity for the student table

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::StudentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub major: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub gpa: Option<f64>,
    pub enrollment_date: Date,
    pub status: StudentStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use crate::server::{
    data::student::StudentRepository,
    model::student::{NewStudentParams, StudentStatus, UpdateStudentParams},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::StudentStatus as StudentStatusEntity;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::student::StudentFactory};

mod count_by_status;
mod delete;
mod exists_by_email;
mod find_active_by_min_gpa;
mod find_by_id;
mod find_by_major;
mod find_by_min_gpa;
mod find_by_status;
mod get_all;
mod search_by_name;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_student(email: &str) -> NewStudentParams {
    NewStudentParams {
        first_name: "Anna".to_string(),
        last_name: "Logan".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        date_of_birth: Some(date(2003, 5, 17)),
        address: Some("12 College Road".to_string()),
        major: Some("Physics".to_string()),
        gpa: Some(3.6),
        enrollment_date: date(2022, 9, 1),
        status: StudentStatus::Active,
    }
}

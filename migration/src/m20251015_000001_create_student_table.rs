use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string_uniq(Student::Email))
                    .col(string_null(Student::Phone))
                    .col(date_null(Student::DateOfBirth))
                    .col(text_null(Student::Address))
                    .col(string_null(Student::Major))
                    .col(double_null(Student::Gpa))
                    .col(date(Student::EnrollmentDate))
                    .col(string(Student::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_status")
                    .table(Student::Table)
                    .col(Student::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_major")
                    .table(Student::Table)
                    .col(Student::Major)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Address,
    Major,
    Gpa,
    EnrollmentDate,
    Status,
}

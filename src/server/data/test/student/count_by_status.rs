use super::*;

/// Tests total and per-status counts.
///
/// Expected: counts reflect the stored statuses
#[tokio::test]
async fn counts_students_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).build().await?;
    StudentFactory::new(db).build().await?;
    StudentFactory::new(db)
        .status(StudentStatusEntity::Inactive)
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.count_by_status(StudentStatus::Active).await?, 2);
    assert_eq!(repo.count_by_status(StudentStatus::Inactive).await?, 1);
    assert_eq!(repo.count_by_status(StudentStatus::Graduated).await?, 0);

    Ok(())
}

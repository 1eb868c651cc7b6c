use super::*;

/// Tests filtering students by status.
///
/// Expected: Ok with only students that have the requested status
#[tokio::test]
async fn returns_only_matching_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).build().await?;
    let graduate = StudentFactory::new(db)
        .status(StudentStatusEntity::Graduated)
        .build()
        .await?;
    StudentFactory::new(db)
        .status(StudentStatusEntity::Inactive)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_status(StudentStatus::Graduated).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, graduate.id);
    assert_eq!(students[0].status, StudentStatus::Graduated);

    Ok(())
}

/// Tests filtering by a status no student has.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_status(StudentStatus::Inactive).await?;

    assert!(students.is_empty());

    Ok(())
}

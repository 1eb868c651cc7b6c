use super::*;

/// Tests filtering students by major.
///
/// Expected: Ok with students whose major matches exactly
#[tokio::test]
async fn returns_students_with_major() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let physics = StudentFactory::new(db).major("Physics").build().await?;
    StudentFactory::new(db).major("Chemistry").build().await?;
    StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_major("Physics").await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, physics.id);

    Ok(())
}

/// Tests combining major and status filters.
///
/// Expected: Ok with students matching both the major and the status
#[tokio::test]
async fn filters_by_major_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).major("Physics").build().await?;
    let graduated_physics = StudentFactory::new(db)
        .major("Physics")
        .status(StudentStatusEntity::Graduated)
        .build()
        .await?;
    StudentFactory::new(db)
        .major("Chemistry")
        .status(StudentStatusEntity::Graduated)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo
        .find_by_major_and_status("Physics", StudentStatus::Graduated)
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, graduated_physics.id);

    Ok(())
}

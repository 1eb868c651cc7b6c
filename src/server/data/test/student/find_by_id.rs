use super::*;

/// Tests finding an existing student by id.
///
/// Expected: Ok(Some) with the matching student
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = StudentFactory::new(db).first_name("Anna").build().await?;

    let repo = StudentRepository::new(db);
    let student = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(student.id, created.id);
    assert_eq!(student.first_name, "Anna");
    assert_eq!(student.email, created.email);

    Ok(())
}

/// Tests finding a student with an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.find_by_id(999).await?;

    assert!(student.is_none());

    Ok(())
}

use super::*;

/// Tests deleting an existing student.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    let db_student = entity::prelude::Student::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_student.is_none());

    Ok(())
}

/// Tests deleting the same student twice.
///
/// Expected: Ok(true) the first time, Ok(false) the second
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests that deleting one student leaves the others in place.
///
/// Expected: Ok(true) and the remaining student still exists
#[tokio::test]
async fn leaves_other_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = StudentFactory::new(db).build().await?;
    let survivor = StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    repo.delete(doomed.id).await?;

    assert!(repo.find_by_id(survivor.id).await?.is_some());
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

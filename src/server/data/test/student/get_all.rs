use super::*;

/// Tests listing all students.
///
/// Expected: Ok with every student ordered by id
#[tokio::test]
async fn returns_all_students_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = StudentFactory::new(db).build().await?;
    let second = StudentFactory::new(db)
        .status(StudentStatusEntity::Graduated)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing students from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert!(students.is_empty());

    Ok(())
}

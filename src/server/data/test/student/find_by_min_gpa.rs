use super::*;

/// Tests the GPA threshold filter.
///
/// Verifies that the threshold is inclusive and students without a GPA are excluded.
///
/// Expected: Ok with exactly the students whose GPA is at least 3.5
#[tokio::test]
async fn returns_students_at_or_above_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let exact = StudentFactory::new(db).gpa(3.5).build().await?;
    let above = StudentFactory::new(db)
        .gpa(3.9)
        .status(StudentStatusEntity::Inactive)
        .build()
        .await?;
    StudentFactory::new(db).gpa(3.49).build().await?;
    StudentFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_by_min_gpa(3.5).await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![exact.id, above.id]);
    assert!(students.iter().all(|s| s.gpa.unwrap() >= 3.5));

    Ok(())
}

use super::*;

/// Tests the active high-GPA query.
///
/// Verifies that non-active students are excluded and results are ordered by GPA
/// descending.
///
/// Expected: Ok with active students at or above the threshold, highest GPA first
#[tokio::test]
async fn returns_active_students_ordered_by_gpa_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let good = StudentFactory::new(db).gpa(3.6).build().await?;
    let best = StudentFactory::new(db).gpa(4.0).build().await?;
    StudentFactory::new(db)
        .gpa(3.95)
        .status(StudentStatusEntity::Graduated)
        .build()
        .await?;
    StudentFactory::new(db)
        .gpa(3.8)
        .status(StudentStatusEntity::Inactive)
        .build()
        .await?;
    StudentFactory::new(db).gpa(3.0).build().await?;

    let repo = StudentRepository::new(db);
    let students = repo.find_active_by_min_gpa(3.5).await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![best.id, good.id]);
    assert!(students.iter().all(|s| s.status == StudentStatus::Active));

    Ok(())
}

use super::*;

/// Tests the email existence check.
///
/// Expected: true for a stored email, false otherwise
#[tokio::test]
async fn reports_whether_email_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.exists_by_email("taken@example.com").await?);
    assert!(!repo.exists_by_email("free@example.com").await?);

    Ok(())
}

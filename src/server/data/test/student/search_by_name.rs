use super::*;

/// Tests that name search matches first and last names case-insensitively.
///
/// Verifies that "an" matches "Anna" by first name and "Logan" by last name.
///
/// Expected: Ok with both matching students and not the third
#[tokio::test]
async fn matches_first_or_last_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let anna = StudentFactory::new(db)
        .first_name("Anna")
        .last_name("Smith")
        .build()
        .await?;
    let logan = StudentFactory::new(db)
        .first_name("Paul")
        .last_name("Logan")
        .build()
        .await?;
    StudentFactory::new(db)
        .first_name("Mike")
        .last_name("Jones")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo.search_by_name("an").await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![anna.id, logan.id]);

    Ok(())
}

/// Tests that an upper-case search term matches lower-case names.
///
/// Expected: Ok with the matching student
#[tokio::test]
async fn matches_upper_case_term() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentFactory::new(db)
        .first_name("maria")
        .last_name("lopez")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo.search_by_name("LOP").await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);

    Ok(())
}

/// Tests that LIKE wildcards in the search term are matched literally.
///
/// Expected: Ok with an empty vector for "%" when no name contains it
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db)
        .first_name("Anna")
        .last_name("Logan")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    assert!(repo.search_by_name("%").await?.is_empty());
    assert!(repo.search_by_name("A_na").await?.is_empty());

    Ok(())
}

/// Tests matching names that start with a non-ASCII capital letter.
///
/// Expected: Ok with the student for the exact name, a prefix and a differently cased term
#[tokio::test]
async fn matches_non_ascii_names_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_table().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let emile = StudentFactory::new(db)
        .first_name("Émile")
        .last_name("Zoëga")
        .build()
        .await?;
    StudentFactory::new(db)
        .first_name("Emma")
        .last_name("Stone")
        .build()
        .await?;

    let repo = StudentRepository::new(db);

    for term in ["Émile", "Ém", "éMILE", "ZOË"] {
        let ids: Vec<i32> = repo
            .search_by_name(term)
            .await?
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![emile.id], "term {term}");
    }

    Ok(())
}

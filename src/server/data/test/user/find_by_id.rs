use super::*;

/// Tests looking up an existing user.
///
/// Expected: Ok(Some) with the stored role parsed
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let courier = factory::create_courier(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(&courier.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, courier.id);
    assert_eq!(user.role, UserRole::Courier);

    Ok(())
}

/// Tests looking up an unknown subject.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id("nobody").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a corrupt stored role surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("driver")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(&user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

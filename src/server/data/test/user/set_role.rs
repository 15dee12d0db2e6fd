use super::*;

/// Tests changing the role of an existing user.
///
/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn sets_role_of_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(&user.id, UserRole::Partner).await?;

    assert_eq!(updated.map(|u| u.role), Some(UserRole::Partner));
    let stored = repo.find_by_id(&user.id).await?.unwrap();
    assert_eq!(stored.role, UserRole::Partner);

    Ok(())
}

/// Tests changing the role of an unknown user.
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
    let updated = repo.set_role("nobody", UserRole::Admin).await?;

    assert!(updated.is_none());

    Ok(())
}

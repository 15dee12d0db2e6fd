use super::*;

/// Tests pagination metadata of the user listing.
///
/// Expected: page of 2 out of 3 users across 2 pages
#[tokio::test]
async fn returns_page_with_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let page = UserService::new(db).get_all_users(0, 2).await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total_pages, 2);

    Ok(())
}

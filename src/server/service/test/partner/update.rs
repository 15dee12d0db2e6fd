use super::*;

/// Tests updating an unknown partner.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_partner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PartnerService::new(db)
        .update(
            1,
            UpdatePartnerParam {
                name: "Shop".to_string(),
                description: None,
                address: "1 Road".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests that ordered products cannot be deleted.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_ordered_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, partner, product, _order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let result = ProductService::new(db).delete(partner.id, product.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a product through another partner's catalog.
///
/// Expected: Err(AppError::NotFound) and the product survives
#[tokio::test]
async fn returns_not_found_for_foreign_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let partner = factory::create_partner(db, &owner.id).await?;
    let other = factory::create_partner(db, &owner.id).await?;
    let product = factory::create_product(db, partner.id).await?;

    let service = ProductService::new(db);
    let result = service.delete(other.id, product.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_catalog(partner.id, true, 0, 10).await?.total, 1);

    Ok(())
}

/// Tests deleting an unordered product.
///
/// Expected: Ok and the catalog is empty
#[tokio::test]
async fn deletes_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let partner = factory::create_partner(db, &owner.id).await?;
    let product = factory::create_product(db, partner.id).await?;

    let service = ProductService::new(db);
    service.delete(partner.id, product.id).await?;

    assert_eq!(service.get_catalog(partner.id, true, 0, 10).await?.total, 0);

    Ok(())
}

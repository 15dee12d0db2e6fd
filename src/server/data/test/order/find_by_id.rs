use super::*;

/// Tests loading an order together with its items.
///
/// Expected: Ok(Some) with the factory's single item
#[tokio::test]
async fn finds_order_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, _partner, product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_by_id(order.id).await?.unwrap();

    assert_eq!(found.id, order.id);
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].product_id, product.id);
    assert_eq!(found.total_cents, product.price_cents);

    Ok(())
}

/// Tests loading an unknown order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    assert!(repo.find_by_id(7).await?.is_none());

    Ok(())
}

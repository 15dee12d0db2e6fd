use super::*;

/// Tests assigning a courier to an order.
///
/// Expected: Ok(Some) with the courier set
#[tokio::test]
async fn assigns_courier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let courier = factory::create_courier(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo.assign_courier(order.id, &courier.id).await?.unwrap();

    assert_eq!(updated.courier_id.as_deref(), Some(courier.id.as_str()));
    assert!(updated.is_assigned_to(&courier.id));

    Ok(())
}

/// Tests assigning a courier to an order that already finished.
///
/// Expected: Ok(None) and the order keeps no courier
#[tokio::test]
async fn skips_finished_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let courier = factory::create_courier(db).await?;

    let repo = OrderRepository::new(db);
    repo.update_status(order.id, OrderStatus::Pending, OrderStatus::Cancelled)
        .await?
        .unwrap();

    assert!(repo.assign_courier(order.id, &courier.id).await?.is_none());

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert!(stored.courier_id.is_none());

    Ok(())
}

/// Tests that product references are detected through order lines.
///
/// Expected: ordered product reports true, fresh product false
#[tokio::test]
async fn detects_ordered_products() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, partner, product, _order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let fresh = factory::create_product(db, partner.id).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.product_is_ordered(product.id).await?);
    assert!(!repo.product_is_ordered(fresh.id).await?);

    Ok(())
}

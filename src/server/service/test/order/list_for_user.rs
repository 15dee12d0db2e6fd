use super::*;

/// Tests that listings are scoped by role.
///
/// Verifies that the customer sees their order, a stranger sees nothing, the partner
/// owner sees the partner's order, and an admin sees everything.
///
/// Expected: 1, 0, 1, and 2 orders respectively
#[tokio::test]
async fn scopes_orders_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, _partner, _product, _order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    factory::helpers::create_order_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let service = OrderService::new(db);

    assert_eq!(
        service.list_for_user(&as_user(customer), 0, 10).await?.total,
        1
    );
    assert_eq!(
        service.list_for_user(&as_user(stranger), 0, 10).await?.total,
        0
    );
    assert_eq!(service.list_for_user(&as_user(owner), 0, 10).await?.total, 1);
    assert_eq!(service.list_for_user(&as_user(admin), 0, 10).await?.total, 2);

    Ok(())
}

/// Tests that couriers only see their assigned orders.
///
/// Expected: 1 order for the assigned courier, 0 for another courier
#[tokio::test]
async fn lists_assigned_orders_for_courier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, _order) =
        factory::helpers::create_assigned_order(db).await?;
    let idle = factory::create_courier(db).await?;

    let service = OrderService::new(db);

    assert_eq!(service.list_for_user(&as_user(courier), 0, 10).await?.total, 1);
    assert_eq!(service.list_for_user(&as_user(idle), 0, 10).await?.total, 0);

    Ok(())
}

use super::*;

/// Tests that each scope only sees its own orders.
///
/// Creates two orders for different customers and partners, one of them assigned to a
/// courier, then lists with each scope.
///
/// Expected: Ok with the scoped subsets and totals
#[tokio::test]
async fn filters_orders_by_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, owner, courier, assigned) = factory::helpers::create_assigned_order(db).await?;
    let (_other_customer, other_owner, _partner, _product, unassigned) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);

    let (orders, total) = repo.get_paginated(OrderScope::All, 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(orders.len(), 2);

    let (orders, total) = repo
        .get_paginated(OrderScope::Customer(customer.id.clone()), 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(orders[0].id, assigned.id);

    let (orders, _) = repo
        .get_paginated(OrderScope::Courier(courier.id.clone()), 0, 10)
        .await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, assigned.id);

    let (orders, _) = repo
        .get_paginated(OrderScope::PartnerOwner(owner.id.clone()), 0, 10)
        .await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, assigned.id);

    let (orders, _) = repo
        .get_paginated(OrderScope::PartnerOwner(other_owner.id.clone()), 0, 10)
        .await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, unassigned.id);
    assert_eq!(orders[0].items.len(), 1);

    Ok(())
}

/// Tests that orders are returned newest first.
///
/// Expected: Ok with the later order on the first page
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let partner = factory::create_partner(db, &owner.id).await?;
    let older = factory::create_order(db, &customer.id, partner.id).await?;
    let newer = factory::create_order(db, &customer.id, partner.id).await?;

    let repo = OrderRepository::new(db);
    let (orders, total) = repo.get_paginated(OrderScope::All, 0, 1).await?;

    assert_eq!(total, 2);
    assert_eq!(orders[0].id, newer.id);

    let (orders, _) = repo.get_paginated(OrderScope::All, 1, 1).await?;
    assert_eq!(orders[0].id, older.id);

    Ok(())
}

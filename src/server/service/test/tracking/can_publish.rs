use super::*;

/// Tests who may publish positions for an order.
///
/// Verifies that the assigned courier and an admin may publish for the assigned
/// courier, while another courier may not publish for themselves or on behalf of the
/// assigned courier.
///
/// Expected: true, true, false, false
#[tokio::test]
async fn requires_assigned_courier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    let admin = as_user(factory::user::create_admin(db).await?);
    let other = factory::create_courier(db).await?;
    let other_id = other.id.clone();
    let other = as_user(other);
    let courier_id = courier.id.clone();
    let courier = as_user(courier);

    let service = TrackingService::new(db);

    assert!(service.can_publish(&courier, order.id, &courier_id).await?);
    assert!(service.can_publish(&admin, order.id, &courier_id).await?);
    assert!(!service.can_publish(&other, order.id, &other_id).await?);
    assert!(!service.can_publish(&other, order.id, &courier_id).await?);

    Ok(())
}

/// Tests publishing for an order without a courier.
///
/// Expected: Ok(false) even for an admin
#[tokio::test]
async fn denies_unassigned_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let admin_id = admin.id.clone();

    assert!(
        !TrackingService::new(db)
            .can_publish(&as_user(admin), order.id, &admin_id)
            .await?
    );

    Ok(())
}

/// Tests publishing for orders that already finished.
///
/// Verifies that the assigned courier may no longer publish once the order is
/// delivered or cancelled.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn denies_finished_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let partner = factory::create_partner(db, &owner.id).await?;
    let courier = factory::create_courier(db).await?;
    let courier_id = courier.id.clone();
    let courier = as_user(courier);

    let service = TrackingService::new(db);
    for status in ["delivered", "cancelled"] {
        let order = factory::order::OrderFactory::new(db, &customer.id, partner.id)
            .courier(&courier_id)
            .status(status)
            .build()
            .await?;

        assert!(!service.can_publish(&courier, order.id, &courier_id).await?);
    }

    Ok(())
}

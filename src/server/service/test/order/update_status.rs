use super::*;

/// Tests the full delivery flow.
///
/// Verifies that the owner accepts, and the assigned courier picks up and delivers.
///
/// Expected: order ends in `delivered`
#[tokio::test]
async fn follows_delivery_flow() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let courier = factory::create_courier(db).await?;
    let owner = as_user(owner);
    let courier_id = courier.id.clone();
    let courier = as_user(courier);

    let service = OrderService::new(db);
    service
        .update_status(&owner, order.id, OrderStatus::Accepted)
        .await?;
    service.assign_courier(&owner, order.id, &courier_id).await?;
    service
        .update_status(&courier, order.id, OrderStatus::PickedUp)
        .await?;
    let delivered = service
        .update_status(&courier, order.id, OrderStatus::Delivered)
        .await?;

    assert_eq!(delivered.status, OrderStatus::Delivered);

    Ok(())
}

/// Tests that a customer cannot accept their own order.
///
/// Expected: Err(AuthError::AccessDenied) and the status stays `pending`
#[tokio::test]
async fn denies_customer_accepting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let customer = as_user(customer);

    let service = OrderService::new(db);
    let result = service
        .update_status(&customer, order.id, OrderStatus::Accepted)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(
        service.get_for_user(&customer, order.id).await?.status,
        OrderStatus::Pending
    );

    Ok(())
}

/// Tests that the customer may cancel a pending order.
///
/// Expected: Ok with status `cancelled`
#[tokio::test]
async fn allows_customer_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let cancelled = OrderService::new(db)
        .update_status(&as_user(customer), order.id, OrderStatus::Cancelled)
        .await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    Ok(())
}

/// Tests transitions the status machine does not allow.
///
/// Verifies that an admin cannot skip from `pending` to `delivered`, nor mark an order
/// picked up while no courier is assigned.
///
/// Expected: Err(AppError::BadRequest) for both
#[tokio::test]
async fn rejects_invalid_transition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let admin = as_user(factory::user::create_admin(db).await?);

    let service = OrderService::new(db);
    let skipped = service
        .update_status(&admin, order.id, OrderStatus::Delivered)
        .await;
    service
        .update_status(&admin, order.id, OrderStatus::Accepted)
        .await?;
    let unassigned = service
        .update_status(&admin, order.id, OrderStatus::PickedUp)
        .await;

    assert!(matches!(skipped, Err(AppError::BadRequest(_))));
    assert!(matches!(unassigned, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that hidden orders look absent.
///
/// Expected: Err(AppError::NotFound) for a user unrelated to the order
#[tokio::test]
async fn hides_order_from_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let stranger = as_user(factory::create_user(db).await?);

    let result = OrderService::new(db)
        .update_status(&stranger, order.id, OrderStatus::Cancelled)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two actors changing the same accepted order at once.
///
/// Verifies that a courier pickup racing a customer cancellation lets exactly one of
/// them through, whichever order the reads and writes interleave in.
///
/// Expected: one Ok, one Err, and the stored status matches the successful change
#[tokio::test]
async fn serializes_concurrent_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    let customer = as_user(customer);
    let courier = as_user(courier);

    let service = OrderService::new(db);
    let (pickup, cancel) = tokio::join!(
        service.update_status(&courier, order.id, OrderStatus::PickedUp),
        service.update_status(&customer, order.id, OrderStatus::Cancelled),
    );

    let winner = match (pickup, cancel) {
        (Ok(updated), Err(err)) | (Err(err), Ok(updated)) => {
            assert!(matches!(
                err,
                AppError::Conflict(_) | AppError::BadRequest(_)
            ));
            updated.status
        }
        (pickup, cancel) => panic!(
            "expected exactly one change to succeed, got {:?} and {:?}",
            pickup.map(|o| o.status),
            cancel.map(|o| o.status)
        ),
    };

    let stored = service.get_for_user(&customer, order.id).await?;
    assert_eq!(stored.status, winner);

    Ok(())
}

use chrono::{Duration, Utc};

use super::*;

/// Tests reading the newest stored position.
///
/// Expected: the later of two records with full coordinates
#[tokio::test]
async fn returns_latest_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    let now = Utc::now();
    factory::delivery_location::create_location_at(
        db,
        order.id,
        &courier.id,
        (1.0, 2.0),
        now - Duration::seconds(30),
    )
    .await?;
    factory::delivery_location::create_location_at(
        db,
        order.id,
        &courier.id,
        (52.520008, 13.404954),
        now,
    )
    .await?;

    let location = TrackingService::new(db)
        .latest_for_user(&as_user(customer), order.id)
        .await?;

    assert_eq!(location.latitude, 52.520008);
    assert_eq!(location.longitude, 13.404954);
    assert_eq!(location.courier_id, courier.id);

    Ok(())
}

/// Tests an order without recorded positions.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_without_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _owner, _courier, order) = factory::helpers::create_assigned_order(db).await?;

    let result = TrackingService::new(db)
        .latest_for_user(&as_user(customer), order.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that hidden orders do not leak positions.
///
/// Expected: Err(AppError::NotFound) for a stranger even though a record exists
#[tokio::test]
async fn hides_location_from_stranger() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    factory::create_location(db, order.id, &courier.id, (1.0, 2.0)).await?;
    let stranger = factory::create_user(db).await?;

    let result = TrackingService::new(db)
        .latest_for_user(&as_user(stranger), order.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests that the newest record wins.
///
/// Seeds records with explicit timestamps out of insertion order.
///
/// Expected: Ok(Some) with the record carrying the greatest timestamp
#[tokio::test]
async fn returns_record_with_latest_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    let now = Utc::now();
    factory::delivery_location::create_location_at(db, order.id, &courier.id, (1.0, 1.0), now)
        .await?;
    factory::delivery_location::create_location_at(
        db,
        order.id,
        &courier.id,
        (0.0, 0.0),
        now - Duration::minutes(5),
    )
    .await?;

    let repo = DeliveryLocationRepository::new(db);
    let latest = repo.latest_for_order(order.id).await?.unwrap();

    assert_eq!((latest.latitude, latest.longitude), (1.0, 1.0));

    Ok(())
}

/// Tests that ties on the timestamp fall back to insertion order.
///
/// Expected: Ok(Some) with the row inserted last
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    let now = Utc::now();
    factory::delivery_location::create_location_at(db, order.id, &courier.id, (1.0, 1.0), now)
        .await?;
    factory::delivery_location::create_location_at(db, order.id, &courier.id, (2.0, 2.0), now)
        .await?;

    let repo = DeliveryLocationRepository::new(db);
    let latest = repo.latest_for_order(order.id).await?.unwrap();

    assert_eq!((latest.latitude, latest.longitude), (2.0, 2.0));

    Ok(())
}

/// Tests an order without any recorded positions.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;
    factory::create_location(db, order.id, &courier.id, (3.0, 3.0)).await?;

    let repo = DeliveryLocationRepository::new(db);
    assert!(repo.latest_for_order(order.id + 1).await?.is_none());

    Ok(())
}

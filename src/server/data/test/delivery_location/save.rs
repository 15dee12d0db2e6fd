use super::*;

/// Tests appending location records.
///
/// Verifies that every save inserts a new row with full coordinates and a server
/// timestamp rather than replacing the previous position.
///
/// Expected: Ok with two stored rows
#[tokio::test]
async fn appends_records_with_full_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, _owner, courier, order) = factory::helpers::create_assigned_order(db).await?;

    let before = Utc::now();
    let repo = DeliveryLocationRepository::new(db);
    let first = repo
        .save(RecordLocationParam {
            order_id: order.id,
            courier_id: courier.id.clone(),
            latitude: 52.520_008_123,
            longitude: 13.404_954_987,
        })
        .await?;
    repo.save(RecordLocationParam {
        order_id: order.id,
        courier_id: courier.id.clone(),
        latitude: 52.5201,
        longitude: 13.4050,
    })
    .await?;

    assert_eq!(first.latitude, 52.520_008_123);
    assert_eq!(first.longitude, 13.404_954_987);
    assert!(first.recorded_at >= before);

    let stored = entity::prelude::DeliveryLocation::find().count(db).await?;
    assert_eq!(stored, 2);

    Ok(())
}

use super::*;

/// Tests that malformed frames only affect the sender.
///
/// Sends invalid JSON and an unknown action from a subscribed connection while another
/// connection is subscribed to the same order.
///
/// Expected: error frames to the sender, no state change, other connection untouched
#[tokio::test]
async fn replies_with_error_and_keeps_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = SubscriptionRegistry::new();

    let (customer, owner, _courier, order) = factory::helpers::create_assigned_order(db).await?;

    let mut sender = Client::connect(db, &registry, customer);
    let mut other = Client::connect(db, &registry, owner);
    sender.send(subscribe(order.id)).await;
    other.send(subscribe(order.id)).await;

    sender.session.handle_text("{not json").await;
    sender
        .send(json!({"action": "teleport", "order_id": order.id}))
        .await;

    let invalid = error("Invalid message format");
    assert_eq!(sender.frames(), vec![invalid.clone(), invalid]);
    assert_eq!(sender.session.state(), SessionState::Subscribed(order.id));
    assert!(other.frames().is_empty());
    assert_eq!(other.session.state(), SessionState::Subscribed(order.id));
    assert_eq!(registry.subscriber_count(order.id), 2);

    Ok(())
}

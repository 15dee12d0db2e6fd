use super::*;

/// Tests creating an order with items.
///
/// Verifies that the order starts pending without a courier and that every line item
/// is stored with its captured unit price.
///
/// Expected: Ok with order and two items
#[tokio::test]
async fn creates_order_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_user(db).await?;
    let owner = factory::create_user(db).await?;
    let partner = factory::create_partner(db, &owner.id).await?;
    let soup = factory::create_product(db, partner.id).await?;
    let bao = factory::create_product(db, partner.id).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(NewOrder {
            customer_id: customer.id.clone(),
            partner_id: partner.id,
            delivery_address: "12 Elm St".to_string(),
            total_cents: 3 * 1250 + 1250,
            items: vec![
                OrderItem {
                    product_id: soup.id,
                    quantity: 3,
                    unit_price_cents: 1250,
                },
                OrderItem {
                    product_id: bao.id,
                    quantity: 1,
                    unit_price_cents: 1250,
                },
            ],
        })
        .await?;

    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.courier_id.is_none());
    assert_eq!(order.total_cents, 5000);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].quantity, 3);

    Ok(())
}

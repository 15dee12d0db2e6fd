use serde_json::json;

use super::*;

/// Tests placing and delivering an order over HTTP.
///
/// Expected: server-side total, then the status flow through to `delivered`
#[tokio::test]
async fn places_and_delivers_order() {
    let test = TestApp::new().await;
    let customer = factory::create_user(&test.db).await.unwrap();
    let owner = factory::user::UserFactory::new(&test.db)
        .role("partner")
        .build()
        .await
        .unwrap();
    let courier = factory::create_courier(&test.db).await.unwrap();
    let partner = factory::create_partner(&test.db, &owner.id).await.unwrap();
    let product = factory::product::ProductFactory::new(&test.db, partner.id)
        .price_cents(425)
        .build()
        .await
        .unwrap();

    let (status, order) = test
        .request(
            Method::POST,
            "/api/orders",
            Some(&customer.id),
            Some(json!({
                "partner_id": partner.id,
                "delivery_address": "7 Hill Road",
                "items": [{ "product_id": product.id, "quantity": 2 }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["total_cents"], 850);
    assert_eq!(order["status"], "pending");

    let order_uri = format!("/api/orders/{}", order["id"]);
    let status_uri = format!("{}/status", order_uri);

    let steps = [
        (owner.id.as_str(), "accepted"),
        (courier.id.as_str(), "picked_up"),
        (courier.id.as_str(), "delivered"),
    ];

    let (status, _) = test
        .request(
            Method::PUT,
            &format!("{}/courier", order_uri),
            Some(&owner.id),
            Some(json!({ "courier_id": courier.id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    for (actor, next) in steps {
        let (status, body) = test
            .request(
                Method::PUT,
                &status_uri,
                Some(actor),
                Some(json!({ "status": next })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], next);
    }
}

/// Tests visibility and status errors over HTTP.
///
/// Expected: 404 for a stranger, 400 for an unknown status, 403 for a customer accepting
#[tokio::test]
async fn reports_order_errors() {
    let test = TestApp::new().await;
    let (customer, _owner, _partner, _product, order) =
        factory::helpers::create_order_with_dependencies(&test.db)
            .await
            .unwrap();
    let stranger = factory::create_user(&test.db).await.unwrap();
    let order_uri = format!("/api/orders/{}", order.id);
    let status_uri = format!("{}/status", order_uri);

    let (status, _) = test.get(&order_uri, Some(&stranger.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = test
        .request(
            Method::PUT,
            &status_uri,
            Some(&customer.id),
            Some(json!({ "status": "teleported" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = test
        .request(
            Method::PUT,
            &status_uri,
            Some(&customer.id),
            Some(json!({ "status": "accepted" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, page) = test.get("/api/orders", Some(&customer.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);
}

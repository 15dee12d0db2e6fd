use serde_json::json;

use super::*;

/// Tests the partner and catalog lifecycle over HTTP.
///
/// Verifies that customers cannot open a partner, a partner user can, and that
/// other users only see available products while the owner sees all of them.
///
/// Expected: 403 for the customer; 1 visible product for the customer, 2 for the owner
#[tokio::test]
async fn owner_manages_catalog() {
    let test = TestApp::new().await;
    let owner = factory::user::UserFactory::new(&test.db)
        .role("partner")
        .build()
        .await
        .unwrap();
    let customer = factory::create_user(&test.db).await.unwrap();
    let partner_body = json!({ "name": "Noodle Bar", "address": "2 Side Street" });

    let (status, _) = test
        .request(
            Method::POST,
            "/api/partners",
            Some(&customer.id),
            Some(partner_body.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, partner) = test
        .request(
            Method::POST,
            "/api/partners",
            Some(&owner.id),
            Some(partner_body),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(partner["owner_id"], owner.id.as_str());

    let products_uri = format!("/api/partners/{}/products", partner["id"]);
    for (name, available) in [("Ramen", true), ("Seasonal Special", false)] {
        let (status, _) = test
            .request(
                Method::POST,
                &products_uri,
                Some(&owner.id),
                Some(json!({ "name": name, "price_cents": 1200, "available": available })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, public) = test.get(&products_uri, Some(&customer.id)).await;
    let (_, full) = test.get(&products_uri, Some(&owner.id)).await;

    assert_eq!(public["total"], 1);
    assert_eq!(public["items"][0]["name"], "Ramen");
    assert_eq!(full["total"], 2);
}

/// Tests that only the owner may change a catalog.
///
/// Expected: 403 for another partner user, 404 for an unknown partner
#[tokio::test]
async fn rejects_foreign_catalog_changes() {
    let test = TestApp::new().await;
    let owner = factory::create_user(&test.db).await.unwrap();
    let other = factory::user::UserFactory::new(&test.db)
        .role("partner")
        .build()
        .await
        .unwrap();
    let partner = factory::create_partner(&test.db, &owner.id).await.unwrap();
    let body = json!({ "name": "Tea", "price_cents": 300, "available": true });

    let (status, _) = test
        .request(
            Method::POST,
            &format!("/api/partners/{}/products", partner.id),
            Some(&other.id),
            Some(body.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = test
        .request(
            Method::POST,
            "/api/partners/9999/products",
            Some(&other.id),
            Some(body),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

use super::*;

/// Tests creating a partner for an existing owner.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_partner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = PartnerRepository::new(db);
    let partner = repo
        .create(CreatePartnerParam {
            owner_id: owner.id.clone(),
            name: "Noodle Bar".to_string(),
            description: Some("Hand-pulled noodles".to_string()),
            address: "5 Market St".to_string(),
        })
        .await?;

    assert_eq!(partner.owner_id, owner.id);
    assert_eq!(partner.name, "Noodle Bar");
    assert_eq!(partner.description.as_deref(), Some("Hand-pulled noodles"));
    assert_eq!(partner.address, "5 Market St");

    let found = repo.find_by_id(partner.id).await?;
    assert_eq!(found, Some(partner));

    Ok(())
}

use super::*;

/// Tests that partners are listed by name with a full total.
///
/// Expected: Ok with the first two names alphabetically and total of three
#[tokio::test]
async fn returns_partners_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    for name in ["Zest", "Apple Pie", "Mango"] {
        factory::partner::PartnerFactory::new(db, &owner.id)
            .name(name)
            .build()
            .await?;
    }

    let repo = PartnerRepository::new(db);
    let (partners, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        partners.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Apple Pie", "Mango"]
    );

    Ok(())
}

use super::*;

/// Tests the full ledger scan.
///
/// Verifies every stored row comes back as a domain record with the user id
/// parsed and the rarity label resolved.
///
/// Expected: Ok with all rows across all users
#[tokio::test]
async fn returns_rows_for_all_users() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ownership)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_ownership(db, "100", "Kae").await?;
    create_ownership(db, "100", "Cherry").await?;
    create_ownership(db, "200", "Kae").await?;

    let repo = InventoryRepository::new(db);
    let records = repo.fetch_all().await?;

    assert_eq!(records.len(), 3);
    assert_eq!(records.iter().filter(|r| r.user_id == 100).count(), 2);
    assert_eq!(records.iter().filter(|r| r.user_id == 200).count(), 1);

    Ok(())
}

/// Tests scan order within one user.
///
/// Rows come back in acquisition order, so a cache rebuilt from this scan
/// reproduces the order the records were created in.
///
/// Expected: Ok with the first-created row first
#[tokio::test]
async fn scan_preserves_acquisition_order() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ownership)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_ownership(db, "100", "Kae").await?;
    create_ownership(db, "100", "Cherry").await?;
    create_ownership(db, "100", "Skye").await?;

    let repo = InventoryRepository::new(db);
    let records = repo.fetch_all().await?;

    let names: Vec<&str> = records.iter().map(|r| r.character_name.as_str()).collect();
    assert_eq!(names, vec!["Kae", "Cherry", "Skye"]);

    Ok(())
}

/// Tests conversion failure on a row whose user id is not numeric.
///
/// Expected: Err with the internal conversion error
#[tokio::test]
async fn unparsable_user_id_is_an_internal_error() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ownership)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    OwnershipFactory::new(db)
        .user_id("not-a-snowflake")
        .build()
        .await
        .unwrap();

    let repo = InventoryRepository::new(db);
    let result = repo.fetch_all().await;

    assert!(matches!(result, Err(GachaError::InternalErr(_))));
}

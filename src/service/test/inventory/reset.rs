use super::*;

/// Tests the administrative inventory reset.
///
/// Every ledger row for the user is deleted and the user dropped from the
/// cache; other users are untouched.
///
/// Expected: Ok with the deleted row count, user empty everywhere
#[tokio::test]
async fn reset_clears_store_and_cache() -> Result<(), GachaError> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_ownership_with_owned(db, "100", "Kae", 3).await?;
    create_ownership_with_owned(db, "100", "Cherry", 1).await?;
    create_ownership_with_owned(db, "200", "Kae", 1).await?;

    let catalog = CatalogCache::new();
    let inventory = InventoryCache::new();
    inventory.refresh(&InventoryRepository::new(db)).await?;
    let locks = OwnershipLocks::new();

    let service = InventoryService::new(db, &inventory, &catalog, &locks);
    let deleted = service.reset(100).await?;

    assert_eq!(deleted, 2);
    assert!(InventoryRepository::new(db).fetch_for_user(100).await?.is_empty());
    assert!(inventory.get(100).await.is_empty());
    assert_eq!(inventory.get(200).await.len(), 1);

    Ok(())
}

/// Tests resetting a user with no inventory.
///
/// Expected: Ok(0), not an error
#[tokio::test]
async fn reset_of_empty_inventory_is_zero() -> Result<(), GachaError> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = CatalogCache::new();
    let inventory = InventoryCache::new();
    let locks = OwnershipLocks::new();

    let service = InventoryService::new(db, &inventory, &catalog, &locks);

    assert_eq!(service.reset(999).await?, 0);

    Ok(())
}

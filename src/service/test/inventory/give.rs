use super::*;

/// Tests granting a character a user does not own yet.
///
/// Expected: Ok with a new record at owned 1, mirrored into the cache
#[tokio::test]
async fn first_give_creates_record() -> Result<(), GachaError> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Kae").rarity("epic").build().await?;

    let catalog = CatalogCache::new();
    catalog.refresh(&CharacterRepository::new(db)).await?;
    let inventory = InventoryCache::new();
    let locks = OwnershipLocks::new();

    let service = InventoryService::new(db, &inventory, &catalog, &locks);
    let record = service.give(100, "Collector", "Kae").await?;

    assert_eq!(record.owned, 1);
    assert_eq!(record.character_name, "Kae");
    assert_eq!(
        InventoryRepository::new(db).find(100, "Kae").await?.unwrap().owned,
        1
    );
    assert_eq!(inventory.find(100, "Kae").await.unwrap().owned, 1);

    Ok(())
}

/// Tests granting a character the user already owns.
///
/// Expected: Ok with the owned count raised, still a single row
#[tokio::test]
async fn repeat_give_increments_owned() -> Result<(), GachaError> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Kae").rarity("common").build().await?;
    create_ownership_with_owned(db, "100", "Kae", 2).await?;

    let catalog = CatalogCache::new();
    catalog.refresh(&CharacterRepository::new(db)).await?;
    let inventory = InventoryCache::new();
    inventory.refresh(&InventoryRepository::new(db)).await?;
    let locks = OwnershipLocks::new();

    let service = InventoryService::new(db, &inventory, &catalog, &locks);
    let record = service.give(100, "Collector", "Kae").await?;

    assert_eq!(record.owned, 3);
    let repo = InventoryRepository::new(db);
    assert_eq!(repo.fetch_for_user(100).await?.len(), 1);
    assert_eq!(inventory.find(100, "Kae").await.unwrap().owned, 3);

    Ok(())
}

/// Tests resolving the catalog name without case.
///
/// Expected: the record is written under the stored casing
#[tokio::test]
async fn give_resolves_name_casing() -> Result<(), GachaError> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Kae").rarity("common").build().await?;

    let catalog = CatalogCache::new();
    catalog.refresh(&CharacterRepository::new(db)).await?;
    let inventory = InventoryCache::new();
    let locks = OwnershipLocks::new();

    let service = InventoryService::new(db, &inventory, &catalog, &locks);
    let record = service.give(100, "Collector", "KAE").await?;

    assert_eq!(record.character_name, "Kae");

    Ok(())
}

/// Tests granting a character missing from the catalog.
///
/// Expected: NotFound, nothing written
#[tokio::test]
async fn unknown_character_is_not_found() -> Result<(), GachaError> {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let catalog = CatalogCache::new();
    let inventory = InventoryCache::new();
    let locks = OwnershipLocks::new();

    let service = InventoryService::new(db, &inventory, &catalog, &locks);
    let result = service.give(100, "Collector", "Nobody").await;

    assert!(matches!(result, Err(GachaError::NotFound(_))));
    assert!(InventoryRepository::new(db).fetch_for_user(100).await?.is_empty());

    Ok(())
}

use super::*;

/// Tests bulk-loading every user's records from the store.
///
/// Expected: Ok with the loaded count and per-user acquisition order kept
#[tokio::test]
async fn loads_full_ledger_from_store() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ownership)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_ownership(db, "100", "Kae").await?;
    create_ownership(db, "100", "Cherry").await?;
    create_ownership(db, "200", "Skye").await?;

    let cache = InventoryCache::new();
    let repo = InventoryRepository::new(db);
    let loaded = cache.refresh(&repo).await?;

    assert_eq!(loaded, 3);
    let names: Vec<String> = cache
        .get(100)
        .await
        .into_iter()
        .map(|r| r.character_name)
        .collect();
    assert_eq!(names, vec!["Kae", "Cherry"]);
    assert_eq!(cache.get(200).await.len(), 1);

    Ok(())
}

/// Tests that a refresh replaces the whole cache.
///
/// Records present only in the cache (for a user whose rows were deleted
/// from the store) must be gone afterwards.
///
/// Expected: the deleted user has no cached records after refresh
#[tokio::test]
async fn refresh_discards_stale_entries() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ownership)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_ownership(db, "100", "Kae").await?;
    create_ownership(db, "200", "Cherry").await?;

    let cache = InventoryCache::new();
    let repo = InventoryRepository::new(db);
    cache.refresh(&repo).await?;

    repo.delete_user(200).await?;
    cache.refresh(&repo).await?;

    assert!(cache.get(200).await.is_empty());
    assert_eq!(cache.get(100).await.len(), 1);

    Ok(())
}

/// Tests refresh idempotence.
///
/// Expected: identical cached records after two refreshes with no store
/// mutation in between
#[tokio::test]
async fn refresh_twice_yields_identical_contents() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ownership)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_ownership(db, "100", "Kae").await?;
    create_ownership(db, "100", "Cherry").await?;

    let cache = InventoryCache::new();
    let repo = InventoryRepository::new(db);

    cache.refresh(&repo).await?;
    let first = cache.get(100).await;
    cache.refresh(&repo).await?;
    let second = cache.get(100).await;

    assert_eq!(first, second);

    Ok(())
}

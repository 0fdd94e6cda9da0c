use super::*;

/// Tests warming the cache from the store.
///
/// Expected: Ok with the loaded count and every stored character cached
#[tokio::test]
async fn loads_full_catalog_from_store() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Kae").rarity("common").build().await?;
    CharacterFactory::new(db).name("Cherry").rarity("rare").build().await?;

    let cache = CatalogCache::new();
    let repo = CharacterRepository::new(db);
    let loaded = cache.refresh(&repo).await?;

    assert_eq!(loaded, 2);
    assert!(cache.get("Kae").await.is_some());
    assert!(cache.get("Cherry").await.is_some());

    Ok(())
}

/// Tests that a refresh replaces instead of merging.
///
/// A character deleted from the store between refreshes must be gone from
/// the cache afterwards; stale entries never linger.
///
/// Expected: the removed character is absent from both views
#[tokio::test]
async fn refresh_discards_stale_entries() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Kae").rarity("common").build().await?;
    CharacterFactory::new(db).name("Cherry").rarity("common").build().await?;

    let cache = CatalogCache::new();
    let repo = CharacterRepository::new(db);
    cache.refresh(&repo).await?;

    repo.delete("Cherry").await?;
    cache.refresh(&repo).await?;

    assert!(cache.get("Cherry").await.is_none());
    for _ in 0..20 {
        let picked = cache.pick_random(Rarity::Common).await.unwrap();
        assert_eq!(picked.name, "Kae");
    }

    Ok(())
}

/// Tests refresh idempotence.
///
/// Two refreshes with no store mutation in between must produce identical
/// cache contents.
///
/// Expected: identical sorted listings after both refreshes
#[tokio::test]
async fn refresh_twice_yields_identical_contents() -> Result<(), GachaError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CharacterFactory::new(db).name("Kae").rarity("common").build().await?;
    CharacterFactory::new(db).name("Cherry").rarity("epic").build().await?;
    CharacterFactory::new(db).name("Nyx").rarity("legendary").build().await?;

    let cache = CatalogCache::new();
    let repo = CharacterRepository::new(db);

    cache.refresh(&repo).await?;
    let first = cache.all().await;
    cache.refresh(&repo).await?;
    let second = cache.all().await;

    assert_eq!(first, second);

    Ok(())
}

use super::*;

/// Tests the cache-side increment.
///
/// Expected: owned raised by one on the matching record only
#[tokio::test]
async fn increment_adds_one() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 1)).await;
    cache.upsert(record(100, "Cherry", Rarity::Rare, 1)).await;

    cache.increment(100, "Kae").await;

    assert_eq!(cache.find(100, "Kae").await.unwrap().owned, 2);
    assert_eq!(cache.find(100, "Cherry").await.unwrap().owned, 1);
}

/// Tests the cache-side decrement.
///
/// Expected: owned lowered by one
#[tokio::test]
async fn decrement_subtracts_one() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 3)).await;

    cache.decrement(100, "Kae").await;

    assert_eq!(cache.find(100, "Kae").await.unwrap().owned, 2);
}

/// Tests the decrement floor.
///
/// More decrements than increments must never drive the count below zero.
///
/// Expected: owned stays at zero
#[tokio::test]
async fn decrement_floors_at_zero() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 1)).await;

    for _ in 0..5 {
        cache.decrement(100, "Kae").await;
    }

    assert_eq!(cache.find(100, "Kae").await.unwrap().owned, 0);
}

/// Tests adjusting a pair the cache does not hold.
///
/// Both adjustments are logged no-ops so a stale cache cannot turn into a
/// hard failure; the next refresh heals the divergence.
///
/// Expected: no record created, nothing panics
#[tokio::test]
async fn missing_record_is_a_no_op() {
    let cache = InventoryCache::new();

    cache.increment(100, "Kae").await;
    cache.decrement(100, "Kae").await;

    assert!(cache.get(100).await.is_empty());
}

/// Tests that adjustments match names without case.
///
/// Expected: the record is found and adjusted
#[tokio::test]
async fn adjustment_matches_name_without_case() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 1)).await;

    cache.increment(100, "kae").await;

    assert_eq!(cache.find(100, "Kae").await.unwrap().owned, 2);
}

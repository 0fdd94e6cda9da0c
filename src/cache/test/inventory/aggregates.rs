use super::*;

/// Tests the total owned and total unique aggregates.
///
/// Aggregates are linear scans at call time, so they must track the record
/// set exactly after any mutation.
///
/// Expected: totals match the sum and count of the records
#[tokio::test]
async fn totals_track_the_record_set() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 3)).await;
    cache.upsert(record(100, "Cherry", Rarity::Rare, 2)).await;
    cache.upsert(record(100, "Nyx", Rarity::Legendary, 1)).await;

    assert_eq!(cache.total_owned(100).await, 6);
    assert_eq!(cache.total_unique(100).await, 3);

    cache.increment(100, "Kae").await;
    assert_eq!(cache.total_owned(100).await, 7);
}

/// Tests the tier-filtered aggregates.
///
/// Expected: only records of the tier contribute
#[tokio::test]
async fn tier_filters_restrict_the_scan() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 3)).await;
    cache.upsert(record(100, "Dolly", Rarity::Common, 2)).await;
    cache.upsert(record(100, "Cherry", Rarity::Rare, 4)).await;

    assert_eq!(cache.total_owned_by_rarity(100, Rarity::Common).await, 5);
    assert_eq!(cache.total_unique_by_rarity(100, Rarity::Common).await, 2);
    assert_eq!(cache.total_owned_by_rarity(100, Rarity::Rare).await, 4);
    assert_eq!(cache.total_owned_by_rarity(100, Rarity::Epic).await, 0);
}

/// Tests that a record at zero copies still counts as a record but not as
/// a unique owned character.
///
/// Expected: unique skips zero-count records, owned totals are unaffected
#[tokio::test]
async fn zero_count_records_are_not_unique() {
    let cache = InventoryCache::new();
    cache.upsert(record(100, "Kae", Rarity::Common, 1)).await;
    cache.upsert(record(100, "Cherry", Rarity::Common, 1)).await;

    cache.decrement(100, "Cherry").await;

    assert_eq!(cache.total_owned(100).await, 1);
    assert_eq!(cache.total_unique(100).await, 1);
    assert_eq!(cache.total_unique_by_rarity(100, Rarity::Common).await, 1);
}

/// Tests aggregates for a user with no records.
///
/// Expected: zero everywhere
#[tokio::test]
async fn unknown_user_aggregates_to_zero() {
    let cache = InventoryCache::new();

    assert_eq!(cache.total_owned(999).await, 0);
    assert_eq!(cache.total_unique(999).await, 0);
    assert_eq!(cache.total_owned_by_rarity(999, Rarity::Common).await, 0);
}

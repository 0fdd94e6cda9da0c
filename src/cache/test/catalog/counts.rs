use super::*;

/// Tests the per-tier and total counts.
///
/// Expected: each tier reports its partition size, total sums them
#[tokio::test]
async fn reports_per_tier_and_total() {
    let cache = CatalogCache::new();
    cache.upsert(def("Kae", Rarity::Common)).await;
    cache.upsert(def("Dolly", Rarity::Common)).await;
    cache.upsert(def("Cherry", Rarity::Rare)).await;
    cache.upsert(def("Nyx", Rarity::Legendary)).await;

    let counts = cache.counts().await;

    assert_eq!(counts.for_rarity(Rarity::Common), 2);
    assert_eq!(counts.for_rarity(Rarity::Rare), 1);
    assert_eq!(counts.for_rarity(Rarity::Epic), 0);
    assert_eq!(counts.for_rarity(Rarity::Legendary), 1);
    assert_eq!(counts.total(), 4);
}

/// Tests the one-line summary rendering.
///
/// Expected: tier order with the total appended
#[tokio::test]
async fn renders_summary_line_in_tier_order() {
    let cache = CatalogCache::new();
    cache.upsert(def("Kae", Rarity::Common)).await;
    cache.upsert(def("Cherry", Rarity::Rare)).await;

    let counts = cache.counts().await;

    assert_eq!(
        counts.to_string(),
        "Common: 1 | Rare: 1 | Epic: 0 | Legendary: 0 | Total: 2"
    );
}

/// Tests counts on an empty cache.
///
/// Expected: zero everywhere
#[tokio::test]
async fn empty_cache_counts_zero() {
    let counts = CatalogCache::new().counts().await;

    assert_eq!(counts.total(), 0);
    for rarity in Rarity::ALL {
        assert_eq!(counts.for_rarity(rarity), 0);
    }
}

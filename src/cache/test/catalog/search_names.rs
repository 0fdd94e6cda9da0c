use super::*;

/// Tests the case-insensitive substring search.
///
/// Expected: every name containing the fragment, stored casing preserved
#[tokio::test]
async fn matches_substring_without_case() {
    let cache = CatalogCache::new();
    cache.upsert(def("Kae", Rarity::Common)).await;
    cache.upsert(def("Kae Swimsuit", Rarity::Rare)).await;
    cache.upsert(def("Cherry", Rarity::Common)).await;

    let results = cache.search_names("kae", 25).await;

    assert_eq!(results.len(), 2);
    assert!(results.contains(&"Kae".to_string()));
    assert!(results.contains(&"Kae Swimsuit".to_string()));
}

/// Tests the result cap.
///
/// Autocomplete choice lists are capped, so the search must stop at the
/// limit.
///
/// Expected: exactly `limit` results
#[tokio::test]
async fn caps_results_at_limit() {
    let cache = CatalogCache::new();
    for i in 0..10 {
        cache.upsert(def(&format!("Clone {}", i), Rarity::Common)).await;
    }

    let results = cache.search_names("clone", 3).await;

    assert_eq!(results.len(), 3);
}

/// Tests searching with a fragment nothing matches.
///
/// Expected: empty vector
#[tokio::test]
async fn no_match_returns_empty() {
    let cache = CatalogCache::new();
    cache.upsert(def("Kae", Rarity::Common)).await;

    assert!(cache.search_names("zzz", 25).await.is_empty());
}

/// Tests that an empty fragment matches everything up to the cap.
///
/// Expected: all cached names
#[tokio::test]
async fn empty_fragment_matches_all() {
    let cache = CatalogCache::new();
    cache.upsert(def("Kae", Rarity::Common)).await;
    cache.upsert(def("Cherry", Rarity::Rare)).await;

    assert_eq!(cache.search_names("", 25).await.len(), 2);
}

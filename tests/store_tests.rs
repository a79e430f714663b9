mod common;

use stratsim::store::ScenarioStore;

#[test]
fn test_ids_monotonic_and_never_reused() {
    let mut store = ScenarioStore::new();
    let a = store.save("A", common::sample_result("A", 70.0));
    let b = store.save("B", common::sample_result("B", 75.0));
    assert!(b > a);

    assert!(store.remove(b));
    let c = store.save("C", common::sample_result("C", 80.0));
    assert!(c > b, "deleted id {} must not be reused (got {})", b, c);
}

#[test]
fn test_round_trip_identical() {
    let result = common::sample_result("Round trip", 66.0);
    let stored_json = serde_json::to_string(&result).unwrap();

    let mut store = ScenarioStore::new();
    let id = store.save("Round trip", result.clone());

    let retrieved = &store.get(id).unwrap().result;
    assert_eq!(*retrieved, result);
    assert_eq!(
        serde_json::to_string(retrieved).unwrap(),
        stored_json,
        "read must not mutate the stored result"
    );

    // A second read is also unchanged.
    assert_eq!(store.get(id).unwrap().result, result);
}

#[test]
fn test_insertion_order_preserved() {
    let mut store = ScenarioStore::new();
    store.save("first", common::sample_result("first", 60.0));
    store.save("second", common::sample_result("second", 61.0));
    store.save("third", common::sample_result("third", 62.0));

    let names: Vec<&str> = store.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_remove() {
    let mut store = ScenarioStore::new();
    let id = store.save("A", common::sample_result("A", 70.0));
    assert_eq!(store.len(), 1);

    assert!(store.remove(id));
    assert!(store.is_empty());
    assert!(store.get(id).is_none());
    // Removing again is a no-op.
    assert!(!store.remove(id));
}

#[test]
fn test_saved_scenario_carries_timestamp() {
    let before = chrono::Utc::now();
    let mut store = ScenarioStore::new();
    let id = store.save("A", common::sample_result("A", 70.0));
    let after = chrono::Utc::now();

    let saved = store.get(id).unwrap();
    assert!(saved.created_at >= before && saved.created_at <= after);
}

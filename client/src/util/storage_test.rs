use super::*;

#[test]
fn memory_storage_round_trips_records() {
    let storage = MemoryStorage::new();
    storage.write("auth-store", "{}");
    assert_eq!(storage.read("auth-store").as_deref(), Some("{}"));
    storage.write("auth-store", r#"{"token":null}"#);
    assert_eq!(storage.read("auth-store").as_deref(), Some(r#"{"token":null}"#));
    assert_eq!(storage.read("other"), None);
}

#[test]
fn memory_storage_clones_share_records() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.write("k", "v");
    assert_eq!(other.read("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_with_record_seeds_value() {
    let storage = MemoryStorage::new().with_record("k", "seed");
    assert_eq!(storage.read("k").as_deref(), Some("seed"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let storage = BrowserStorage;
    storage.write("k", "v");
    assert_eq!(storage.read("k"), None);
}

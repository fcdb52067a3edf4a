use super::*;
use crate::util::storage::MemoryStorage;
use serde_json::json;

const KEY: &str = "auth-store";
const BASE: &str = "http://localhost:3000/api/v1";

fn creds(token: &str) -> AuthCredentials {
    AuthCredentials { token: token.to_owned(), details: json!({ "username": "admin" }) }
}

// =============================================================
// open
// =============================================================

#[test]
fn open_without_record_is_signed_out() {
    let store = SessionStore::open(MemoryStorage::new(), KEY, BASE);
    assert!(store.token().is_none());
    assert!(store.details().is_none());
    assert_eq!(store.base_url(), BASE);
}

#[test]
fn open_restores_persisted_credentials() {
    let storage = MemoryStorage::new().with_record(KEY, r#"{"token":"t1","details":{"username":"admin"}}"#);
    let store = SessionStore::open(storage, KEY, BASE);
    assert_eq!(store.token(), Some("t1"));
    assert_eq!(store.details(), Some(&json!({ "username": "admin" })));
}

#[test]
fn open_ignores_details_without_token() {
    let storage = MemoryStorage::new().with_record(KEY, r#"{"token":null,"details":{"username":"admin"}}"#);
    let store = SessionStore::open(storage, KEY, BASE);
    assert!(store.token().is_none());
    assert!(store.details().is_none());
}

#[test]
fn open_treats_empty_token_as_signed_out() {
    let storage = MemoryStorage::new().with_record(KEY, r#"{"token":"","details":null}"#);
    let store = SessionStore::open(storage, KEY, BASE);
    assert!(!store.session().is_authenticated());
}

#[test]
fn open_survives_corrupt_record() {
    let storage = MemoryStorage::new().with_record(KEY, "not json");
    let store = SessionStore::open(storage, KEY, BASE);
    assert!(store.token().is_none());
}

// =============================================================
// set_auth / clear_auth
// =============================================================

#[test]
fn set_auth_sets_token_and_details_together() {
    let mut store = SessionStore::open(MemoryStorage::new(), KEY, BASE);
    store.set_auth(creds("t1"));
    assert_eq!(store.token(), Some("t1"));
    assert_eq!(store.details(), Some(&json!({ "username": "admin" })));
}

#[test]
fn set_auth_persists_across_reload() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone(), KEY, BASE);
    store.set_auth(creds("t1"));

    let reloaded = SessionStore::open(storage, KEY, BASE);
    assert_eq!(reloaded.token(), Some("t1"));
    assert_eq!(reloaded.details(), store.details());
}

#[test]
fn clear_auth_clears_both_and_persists() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone(), KEY, BASE);
    store.set_auth(creds("t1"));
    store.clear_auth();
    assert!(store.token().is_none());
    assert!(store.details().is_none());

    let reloaded = SessionStore::open(storage.clone(), KEY, BASE);
    assert!(reloaded.token().is_none());
    let raw: serde_json::Value = serde_json::from_str(&storage.read(KEY).unwrap()).unwrap();
    assert_eq!(raw, json!({ "token": null, "details": null }));
}

#[test]
fn persisted_record_never_contains_base_url() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone(), KEY, BASE);
    store.set_auth(creds("t1"));
    let raw = storage.read(KEY).unwrap();
    assert!(!raw.contains("localhost"));
    assert!(!raw.contains("base"));
}

#[test]
fn base_url_survives_logout() {
    let mut store = SessionStore::open(MemoryStorage::new(), KEY, BASE);
    store.set_auth(creds("t1"));
    store.clear_auth();
    assert_eq!(store.base_url(), BASE);
}

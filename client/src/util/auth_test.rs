use super::*;
use crate::state::session::{AuthCredentials, SessionStore};
use crate::util::storage::MemoryStorage;

fn signed_in() -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::open(MemoryStorage::new(), "auth-store", "http://api");
    store.set_auth(AuthCredentials { token: "tok".to_owned(), details: serde_json::json!({ "name": "Asha" }) });
    store
}

#[test]
fn should_redirect_when_signed_out() {
    let store = SessionStore::open(MemoryStorage::new(), "auth-store", "http://api");
    assert!(should_redirect_to_login(store.session()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    assert!(!should_redirect_to_login(signed_in().session()));
}

#[test]
fn should_redirect_after_clear_auth() {
    let mut store = signed_in();
    store.clear_auth();
    assert!(should_redirect_to_login(store.session()));
}

#[test]
fn redirects_replace_history() {
    assert!(replace_navigation().replace);
}

//! Browser tests for the persisted wallet session.
//!
//! Run with `wasm-pack test --headless --firefox dashboard-web`.

#![cfg(target_arch = "wasm32")]

use asseti_web::services::storage::BrowserStore;
use shared::session::{ConnectionState, SessionStore, ADDRESS_KEY, CONNECTED_KEY};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

#[wasm_bindgen_test]
fn session_round_trips_through_local_storage() {
    let store = BrowserStore;
    ConnectionState::connected(ADDRESS).save(&store).unwrap();

    assert_eq!(store.get(CONNECTED_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(store.get(ADDRESS_KEY).unwrap().as_deref(), Some(ADDRESS));

    let restored = ConnectionState::load(&store).unwrap();
    assert!(restored.is_connected());
    assert_eq!(restored.address(), Some(ADDRESS));

    ConnectionState::clear(&store).unwrap();
}

#[wasm_bindgen_test]
fn clearing_removes_both_keys() {
    let store = BrowserStore;
    ConnectionState::connected(ADDRESS).save(&store).unwrap();

    ConnectionState::clear(&store).unwrap();

    assert_eq!(store.get(CONNECTED_KEY).unwrap(), None);
    assert_eq!(store.get(ADDRESS_KEY).unwrap(), None);
    assert!(!ConnectionState::load(&store).unwrap().is_connected());
}

#[wasm_bindgen_test]
fn stale_flag_without_address_loads_disconnected() {
    let store = BrowserStore;
    ConnectionState::clear(&store).unwrap();
    store.set(CONNECTED_KEY, "true").unwrap();

    assert_eq!(ConnectionState::load(&store).unwrap(), ConnectionState::disconnected());

    ConnectionState::clear(&store).unwrap();
}

//! # Wallet Session State
//!
//! The connection-state model behind the dashboard's wallet context:
//!
//! - [`WalletState`]: in-memory state including the transient `Connecting` step
//! - [`ConnectionState`]: the persisted `{ address, is_connected }` pair
//! - [`SessionStore`]: key/value storage seam (browser local storage in the
//!   web crate, [`MemoryStore`] in tests)
//! - [`plan_restore`], [`resolve_accounts`], [`accounts_changed`]: the
//!   connect/restore/notification rules, kept free of the browser so the
//!   wallet context only wires them to signals
//!
//! The invariant "address is present only while connected" is carried by the
//! types: `WalletState::Connected` is the only variant holding an address and
//! `ConnectionState` has private fields behind checked constructors.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Storage key for the last connected address.
pub const ADDRESS_KEY: &str = "asseti_wallet_address";
/// Storage key for the connection flag (`"true"` / `"false"`).
pub const CONNECTED_KEY: &str = "asseti_wallet_connected";

/// Wallet connection state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected { address: String },
}

/// Outcome of applying a provider `accountsChanged` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountsChange {
    Disconnected,
    Switched(String),
    Unchanged,
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Apply the account list reported by the provider.
    ///
    /// An empty list means the user disconnected the site from the wallet.
    /// Otherwise the first account becomes active.
    pub fn apply_accounts(&mut self, accounts: &[String]) -> AccountsChange {
        let Some(first) = accounts.first() else {
            let was_connected = self.is_connected();
            *self = WalletState::Disconnected;
            return if was_connected {
                AccountsChange::Disconnected
            } else {
                AccountsChange::Unchanged
            };
        };

        match self.address() {
            Some(current) if current.eq_ignore_ascii_case(first) => AccountsChange::Unchanged,
            _ => {
                *self = WalletState::Connected {
                    address: first.clone(),
                };
                AccountsChange::Switched(first.clone())
            }
        }
    }

    pub fn to_connection_state(&self) -> ConnectionState {
        match self {
            WalletState::Connected { address } => ConnectionState::connected(address.clone()),
            _ => ConnectionState::disconnected(),
        }
    }
}

impl From<ConnectionState> for WalletState {
    fn from(state: ConnectionState) -> Self {
        match state.address {
            Some(address) => WalletState::Connected { address },
            None => WalletState::Disconnected,
        }
    }
}

/// The persisted connection entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionState {
    address: Option<String>,
    is_connected: bool,
}

impl ConnectionState {
    pub fn connected(address: impl Into<String>) -> Self {
        let address = address.into();
        if address.trim().is_empty() {
            return Self::disconnected();
        }
        Self {
            address: Some(address),
            is_connected: true,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            address: None,
            is_connected: false,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    /// Read the persisted state. Anything other than a `"true"` flag with a
    /// non-empty address restores as disconnected.
    pub fn load(store: &impl SessionStore) -> Result<Self> {
        let flag = store.get(CONNECTED_KEY)?;
        let address = store.get(ADDRESS_KEY)?;

        match (flag.as_deref(), address) {
            (Some("true"), Some(address)) => Ok(Self::connected(address)),
            _ => Ok(Self::disconnected()),
        }
    }

    /// Persist this state. A disconnected state removes both keys.
    pub fn save(&self, store: &impl SessionStore) -> Result<()> {
        match &self.address {
            Some(address) if self.is_connected => {
                store.set(ADDRESS_KEY, address)?;
                store.set(CONNECTED_KEY, "true")
            }
            _ => Self::clear(store),
        }
    }

    pub fn clear(store: &impl SessionStore) -> Result<()> {
        store.remove(ADDRESS_KEY)?;
        store.remove(CONNECTED_KEY)
    }
}

// ============================================================================
// SESSION TRANSITIONS
// ============================================================================

/// A state change decided from provider input.
///
/// Persistence is best effort: `storage_error` is reported, but `state`
/// stands either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WalletState,
    pub change: AccountsChange,
    pub storage_error: Option<AppError>,
}

impl Transition {
    /// Whether `state` differs from the state the transition started from.
    pub fn is_change(&self) -> bool {
        self.change != AccountsChange::Unchanged
    }
}

/// What to do with a persisted session at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestorePlan {
    /// Nothing stored, or stored as disconnected.
    Nothing,
    /// A session was stored but no provider is present; storage was cleared.
    Cleared,
    /// Ask the provider to confirm this state.
    Confirm(WalletState),
}

/// Decide how to restore the persisted session.
pub fn plan_restore(store: &impl SessionStore, provider_installed: bool) -> Result<RestorePlan> {
    let stored = ConnectionState::load(store)?;
    if !stored.is_connected() {
        return Ok(RestorePlan::Nothing);
    }
    if !provider_installed {
        ConnectionState::clear(store)?;
        return Ok(RestorePlan::Cleared);
    }
    Ok(RestorePlan::Confirm(stored.into()))
}

/// Resolve the accounts returned by `eth_requestAccounts` (connect) or
/// `eth_accounts` (restore) and persist the outcome.
///
/// No accounts leaves the wallet disconnected with storage cleared.
pub fn resolve_accounts(
    current: &WalletState,
    accounts: &[String],
    store: &impl SessionStore,
) -> Transition {
    let mut state = current.clone();
    let mut change = state.apply_accounts(accounts);
    if change == AccountsChange::Unchanged && state != *current {
        // Connecting -> Disconnected on an empty list
        change = AccountsChange::Disconnected;
    }

    let storage_error = state.to_connection_state().save(store).err();
    Transition { state, change, storage_error }
}

/// Apply a provider `accountsChanged` notification.
///
/// Ignored unless connected. Storage is only touched when the active
/// account actually changes.
pub fn accounts_changed(
    current: &WalletState,
    accounts: &[String],
    store: &impl SessionStore,
) -> Transition {
    let mut state = current.clone();
    let change = if current.is_connected() {
        state.apply_accounts(accounts)
    } else {
        AccountsChange::Unchanged
    };

    let storage_error = match change {
        AccountsChange::Unchanged => None,
        _ => state.to_connection_state().save(store).err(),
    };
    Transition { state, change, storage_error }
}

/// String key/value storage used to persist the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    fn accounts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_connected_state_holds_address() {
        let state = ConnectionState::connected(ADDR);
        assert!(state.is_connected());
        assert_eq!(state.address(), Some(ADDR));

        let empty = ConnectionState::connected("  ");
        assert!(!empty.is_connected());
        assert_eq!(empty.address(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();

        assert_eq!(store.get(ADDRESS_KEY).unwrap().as_deref(), Some(ADDR));
        assert_eq!(store.get(CONNECTED_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(
            ConnectionState::load(&store).unwrap(),
            ConnectionState::connected(ADDR)
        );
    }

    #[test]
    fn test_disconnect_clears_both_keys() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();
        assert_eq!(store.len(), 2);

        ConnectionState::clear(&store).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get(ADDRESS_KEY).unwrap(), None);
        assert_eq!(store.get(CONNECTED_KEY).unwrap(), None);
    }

    #[test]
    fn test_saving_disconnected_state_clears_keys() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();
        ConnectionState::disconnected().save(&store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_requires_flag_and_address() {
        let store = MemoryStore::new();
        assert_eq!(
            ConnectionState::load(&store).unwrap(),
            ConnectionState::disconnected()
        );

        store.set(ADDRESS_KEY, ADDR).unwrap();
        assert!(!ConnectionState::load(&store).unwrap().is_connected());

        store.set(CONNECTED_KEY, "false").unwrap();
        assert!(!ConnectionState::load(&store).unwrap().is_connected());

        store.set(CONNECTED_KEY, "true").unwrap();
        store.set(ADDRESS_KEY, "").unwrap();
        assert!(!ConnectionState::load(&store).unwrap().is_connected());
    }

    #[test]
    fn test_zero_accounts_resets_to_disconnected() {
        let mut state = WalletState::Connected {
            address: ADDR.to_string(),
        };
        assert_eq!(state.apply_accounts(&[]), AccountsChange::Disconnected);
        assert_eq!(state, WalletState::Disconnected);
        assert_eq!(state.address(), None);

        assert_eq!(state.apply_accounts(&[]), AccountsChange::Unchanged);
    }

    #[test]
    fn test_first_account_becomes_active() {
        let mut state = WalletState::Disconnected;
        let change = state.apply_accounts(&accounts(&[ADDR, "0xdead"]));
        assert_eq!(change, AccountsChange::Switched(ADDR.to_string()));
        assert_eq!(state.address(), Some(ADDR));

        let change = state.apply_accounts(&accounts(&["0xbeef"]));
        assert_eq!(change, AccountsChange::Switched("0xbeef".to_string()));
    }

    #[test]
    fn test_same_account_in_other_case_is_unchanged() {
        let mut state = WalletState::Connected {
            address: ADDR.to_string(),
        };
        let lower = ADDR.to_lowercase();
        assert_eq!(state.apply_accounts(&accounts(&[&lower])), AccountsChange::Unchanged);
        assert_eq!(state.address(), Some(ADDR));
    }

    #[test]
    fn test_connecting_is_not_connected() {
        let state = WalletState::Connecting;
        assert!(!state.is_connected());
        assert!(state.is_connecting());
        assert_eq!(state.to_connection_state(), ConnectionState::disconnected());
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage(format!("write {}: quota exceeded", key)))
        }

        fn remove(&self, key: &str) -> Result<()> {
            Err(AppError::Storage(format!("remove {}: quota exceeded", key)))
        }
    }

    fn connected(address: &str) -> WalletState {
        WalletState::Connected {
            address: address.to_string(),
        }
    }

    #[test]
    fn test_connect_with_accounts_persists_first() {
        let store = MemoryStore::new();
        let outcome = resolve_accounts(&WalletState::Connecting, &accounts(&[ADDR, "0xdead"]), &store);

        assert_eq!(outcome.state, connected(ADDR));
        assert_eq!(outcome.change, AccountsChange::Switched(ADDR.to_string()));
        assert_eq!(outcome.storage_error, None);
        assert_eq!(ConnectionState::load(&store).unwrap(), ConnectionState::connected(ADDR));
    }

    #[test]
    fn test_connect_with_zero_accounts_resets_and_clears() {
        let store = MemoryStore::new();
        ConnectionState::connected("0xold").save(&store).unwrap();

        let outcome = resolve_accounts(&WalletState::Connecting, &[], &store);

        assert_eq!(outcome.state, WalletState::Disconnected);
        assert!(outcome.is_change());
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_without_provider_clears_storage() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();

        assert_eq!(plan_restore(&store, false).unwrap(), RestorePlan::Cleared);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_with_provider_asks_for_confirmation() {
        let store = MemoryStore::new();
        assert_eq!(plan_restore(&store, true).unwrap(), RestorePlan::Nothing);

        ConnectionState::connected(ADDR).save(&store).unwrap();
        assert_eq!(plan_restore(&store, true).unwrap(), RestorePlan::Confirm(connected(ADDR)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_restore_confirmed_with_zero_accounts_resets() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();

        let outcome = resolve_accounts(&connected(ADDR), &[], &store);

        assert_eq!(outcome.state, WalletState::Disconnected);
        assert_eq!(outcome.change, AccountsChange::Disconnected);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_confirmed_with_same_account_is_unchanged() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();

        let outcome = resolve_accounts(&connected(ADDR), &accounts(&[ADDR.to_lowercase().as_str()]), &store);

        assert!(!outcome.is_change());
        assert_eq!(outcome.state, connected(ADDR));
        assert_eq!(store.get(ADDRESS_KEY).unwrap().as_deref(), Some(ADDR));
    }

    #[test]
    fn test_accounts_changed_ignored_while_disconnected() {
        let store = MemoryStore::new();
        for current in [WalletState::Disconnected, WalletState::Connecting] {
            let outcome = accounts_changed(&current, &accounts(&[ADDR]), &store);
            assert_eq!(outcome.state, current);
            assert!(!outcome.is_change());
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_accounts_changed_switch_persists_new_address() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();

        let outcome = accounts_changed(&connected(ADDR), &accounts(&["0xbeef"]), &store);

        assert_eq!(outcome.change, AccountsChange::Switched("0xbeef".to_string()));
        assert_eq!(store.get(ADDRESS_KEY).unwrap().as_deref(), Some("0xbeef"));
        assert_eq!(store.get(CONNECTED_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_accounts_changed_to_empty_clears_storage() {
        let store = MemoryStore::new();
        ConnectionState::connected(ADDR).save(&store).unwrap();

        let outcome = accounts_changed(&connected(ADDR), &[], &store);

        assert_eq!(outcome.change, AccountsChange::Disconnected);
        assert_eq!(outcome.state, WalletState::Disconnected);
        assert!(store.is_empty());
    }

    #[test]
    fn test_same_account_notification_is_not_a_change() {
        // Wallets re-announce the active account on unlock, sometimes in
        // another letter case.
        let outcome = accounts_changed(&connected(ADDR), &accounts(&[ADDR.to_lowercase().as_str()]), &ReadOnlyStore);

        assert!(!outcome.is_change());
        assert_eq!(outcome.state, connected(ADDR));
        assert_eq!(outcome.storage_error, None);
    }

    #[test]
    fn test_storage_failure_does_not_block_transition() {
        let outcome = resolve_accounts(&WalletState::Connecting, &accounts(&[ADDR]), &ReadOnlyStore);

        assert_eq!(outcome.state, connected(ADDR));
        assert!(matches!(outcome.storage_error, Some(AppError::Storage(_))));
    }

    #[test]
    fn test_connection_state_json_shape() {
        let json = serde_json::to_value(ConnectionState::connected(ADDR)).unwrap();
        assert_eq!(json["address"], ADDR);
        assert_eq!(json["isConnected"], true);
    }
}

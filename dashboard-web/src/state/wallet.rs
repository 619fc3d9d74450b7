//! Wallet state management
//!
//! [`WalletContext`] is the single connection-state holder of the app. It is
//! provided at the root, persists `{ address, connected }` to local storage,
//! and listens to the provider's `accountsChanged` / `chainChanged` events
//! for as long as the providing component is mounted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::error::AppError;
use shared::network::{parse_chain_id, NetworkConfig};
use shared::session::{self, AccountsChange, ConnectionState, RestorePlan, Transition, WalletState};
use shared::utils::format_wei;

use crate::services::storage::BrowserStore;
use crate::services::wallet;
use crate::utils::constants::BALANCE_PRECISION;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    /// Cached native balance, already formatted in ETH
    pub balance: RwSignal<Option<String>>,
    pub chain_id: RwSignal<Option<u64>>,
    /// Message for the error banner
    pub error: RwSignal<Option<String>>,
    network: StoredValue<NetworkConfig>,
}

impl WalletContext {
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            balance: RwSignal::new(None),
            chain_id: RwSignal::new(None),
            error: RwSignal::new(None),
            network: StoredValue::new(network),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.wallet.with(|state| state.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn network(&self) -> NetworkConfig {
        self.network.get_value()
    }

    /// Connected, on a known chain, and that chain is not the target network.
    pub fn is_wrong_network(&self) -> bool {
        let chain_id = self.chain_id.get();
        self.is_connected()
            && chain_id.is_some()
            && self.network.with_value(|network| !network.matches(chain_id))
    }

    pub fn set_error(&self, error: &AppError) {
        self.error.set(Some(error.to_string()));
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    fn current_address(&self) -> Option<String> {
        self.wallet
            .with_untracked(|state| state.address().map(|s| s.to_string()))
    }

    /// Commit a session transition. The signal is only written when the
    /// state actually changed, so subscribers do not re-run on re-announced
    /// accounts.
    fn commit(&self, transition: &Transition) {
        if let Some(e) = &transition.storage_error {
            log::warn!("could not persist wallet session: {}", e);
        }
        let unchanged = self.wallet.with_untracked(|current| *current == transition.state);
        if !unchanged {
            self.wallet.set(transition.state.clone());
        }
        if !transition.state.is_connected() {
            self.balance.set(None);
        }
    }

    fn reset(&self) {
        self.wallet.set(WalletState::Disconnected);
        self.balance.set(None);
        if let Err(e) = ConnectionState::clear(&BrowserStore) {
            log::warn!("could not clear wallet session: {}", e);
        }
    }

    /// Ask the wallet for account access and make the first account active.
    pub async fn connect(self) {
        if !wallet::is_provider_installed() {
            self.set_error(&AppError::NoProvider);
            return;
        }

        self.dismiss_error();
        self.wallet.set(WalletState::Connecting);

        match wallet::request_accounts().await {
            Ok(accounts) => {
                let transition =
                    session::resolve_accounts(&WalletState::Connecting, &accounts, &BrowserStore);
                self.commit(&transition);

                match transition.state.address() {
                    Some(address) => {
                        log::info!("wallet connected: {}", address);
                        self.refresh_chain().await;
                        self.refresh_balance().await;
                    }
                    None => {
                        log::warn!("wallet returned no accounts");
                        self.set_error(&AppError::NoAccounts);
                    }
                }
            }
            Err(e) => {
                log::error!("wallet connection failed: {}", e);
                self.wallet.set(WalletState::Disconnected);
                self.set_error(&e);
            }
        }
    }

    pub fn disconnect(&self) {
        log::info!("wallet disconnected");
        self.reset();
    }

    /// Re-read the native balance of the active address.
    pub async fn refresh_balance(self) {
        let Some(address) = self.current_address() else {
            return;
        };

        match wallet::get_balance(&address).await {
            Ok(wei) => self.balance.set(Some(format_wei(wei, BALANCE_PRECISION))),
            Err(e) => {
                log::error!("balance query failed: {}", e);
                self.set_error(&e);
            }
        }
    }

    async fn refresh_chain(self) {
        match wallet::get_chain_id().await {
            Ok(chain_id) => self.chain_id.set(Some(chain_id)),
            Err(e) => log::warn!("chain id query failed: {}", e),
        }
    }

    /// Restore the persisted session and confirm it with the provider.
    pub async fn restore(self) {
        let plan = match session::plan_restore(&BrowserStore, wallet::is_provider_installed()) {
            Ok(plan) => plan,
            Err(e) => {
                log::warn!("could not read wallet session: {}", e);
                return;
            }
        };

        let stored = match plan {
            RestorePlan::Nothing => return,
            RestorePlan::Cleared => {
                log::info!("stored session but no wallet provider; cleared");
                return;
            }
            RestorePlan::Confirm(stored) => stored,
        };

        match wallet::list_accounts().await {
            Ok(accounts) => {
                let transition = session::resolve_accounts(&stored, &accounts, &BrowserStore);
                self.commit(&transition);

                if transition.state.is_connected() {
                    self.refresh_chain().await;
                    self.refresh_balance().await;
                } else {
                    log::info!("wallet no longer authorises this site");
                }
            }
            Err(e) => log::warn!("could not confirm stored session: {}", e),
        }
    }

    /// Provider `accountsChanged` handler.
    pub fn handle_accounts_changed(&self, accounts: Vec<String>) {
        let current = self.wallet.get_untracked();
        let transition = session::accounts_changed(&current, &accounts, &BrowserStore);
        if !transition.is_change() {
            return;
        }
        self.commit(&transition);

        match &transition.change {
            AccountsChange::Disconnected => {
                log::info!("wallet disconnected from the provider side");
            }
            AccountsChange::Switched(address) => {
                log::info!("active account changed to {}", address);
                self.balance.set(None);
                spawn_local(self.refresh_balance());
            }
            AccountsChange::Unchanged => {}
        }
    }

    /// Provider `chainChanged` handler.
    pub fn handle_chain_changed(&self, raw_chain_id: &str) {
        match parse_chain_id(raw_chain_id) {
            Ok(chain_id) => {
                log::info!("chain changed to {}", chain_id);
                self.chain_id.set(Some(chain_id));
                if self.wallet.with_untracked(|s| s.is_connected()) {
                    spawn_local(self.refresh_balance());
                }
            }
            Err(e) => log::warn!("ignoring chainChanged: {}", e),
        }
    }

    /// Ask the wallet to switch to the dashboard's network.
    pub async fn switch_network(self) {
        let network = self.network.get_value();
        match wallet::switch_chain(&network).await {
            Ok(()) => self.refresh_chain().await,
            Err(e) => {
                log::error!("network switch failed: {}", e);
                self.set_error(&e);
            }
        }
    }

    fn subscribe(self) {
        let accounts = wallet::on_accounts_changed(move |list| self.handle_accounts_changed(list));
        let chain = wallet::on_chain_changed(move |raw| self.handle_chain_changed(&raw));
        if !(accounts && chain) {
            log::debug!("wallet provider events unavailable");
        }
    }
}

/// Create the context, subscribe to provider events and restore the
/// persisted session. Listeners are detached when the owner is cleaned up.
pub fn provide_wallet_context(network: NetworkConfig) -> WalletContext {
    let context = WalletContext::new(network);
    provide_context(context);

    context.subscribe();
    on_cleanup(wallet::unsubscribe_all);
    spawn_local(context.restore());

    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

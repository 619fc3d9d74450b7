//! EIP-1193 Wallet Provider Bridge
//!
//! JavaScript interop over the injected `window.ethereum` provider
//! (MetaMask, Coinbase Wallet, Rabby, ...). Every call goes through
//! `request({ method, params })`; failures are mapped to [`AppError`].

use js_sys::{Array, Reflect};
use serde::Serialize;
use shared::error::{AppError, Result};
use shared::network::{parse_chain_id, NetworkConfig};
use shared::utils::parse_hex_quantity;
use wasm_bindgen::prelude::*;

/// EIP-3085 code for "chain not added to the wallet yet".
const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

// ============================================================================
// PROVIDER INTEROP (JavaScript)
// ============================================================================

#[wasm_bindgen(inline_js = "
const handlers = {};

export function hasEthereumProvider() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function providerRequest(method, params) {
    const provider = window.ethereum;
    if (!provider) {
        throw { code: null, message: 'No wallet provider found' };
    }
    return await provider.request({ method, params });
}

export function subscribeProvider(event, callback) {
    const provider = window.ethereum;
    if (!provider || typeof provider.on !== 'function') {
        return false;
    }
    // Re-subscribing replaces the previous handler for this event
    if (handlers[event] && typeof provider.removeListener === 'function') {
        provider.removeListener(event, handlers[event]);
    }
    handlers[event] = callback;
    provider.on(event, callback);
    return true;
}

export function unsubscribeProviderAll() {
    const provider = window.ethereum;
    for (const event of Object.keys(handlers)) {
        if (provider && typeof provider.removeListener === 'function') {
            provider.removeListener(event, handlers[event]);
        }
        delete handlers[event];
    }
}
")]
extern "C" {
    fn hasEthereumProvider() -> bool;

    #[wasm_bindgen(catch)]
    async fn providerRequest(method: &str, params: JsValue) -> std::result::Result<JsValue, JsValue>;

    fn subscribeProvider(event: &str, callback: &JsValue) -> bool;

    fn unsubscribeProviderAll();
}

// ============================================================================
// REQUEST PARAMETERS
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParams {
    chain_id: String,
}

#[derive(Serialize)]
struct NativeCurrency {
    name: String,
    symbol: String,
    decimals: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddChainParams {
    chain_id: String,
    chain_name: String,
    native_currency: NativeCurrency,
    rpc_urls: Vec<String>,
    block_explorer_urls: Vec<String>,
}

impl From<&NetworkConfig> for AddChainParams {
    fn from(network: &NetworkConfig) -> Self {
        Self {
            chain_id: network.chain_id_hex(),
            chain_name: network.name.clone(),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: network.currency.clone(),
                decimals: shared::utils::NATIVE_DECIMALS,
            },
            rpc_urls: vec![network.rpc_url.clone()],
            block_explorer_urls: vec![network.explorer_url.clone()],
        }
    }
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

pub fn is_provider_installed() -> bool {
    hasEthereumProvider()
}

/// Convert a thrown provider value into an [`AppError`].
fn provider_error(err: &JsValue) -> AppError {
    let code = Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i64);

    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    AppError::from_provider(code, message)
}

async fn request(method: &str, params: Array) -> Result<JsValue> {
    if !is_provider_installed() {
        return Err(AppError::NoProvider);
    }

    log::debug!("provider request: {}", method);
    providerRequest(method, params.into()).await.map_err(|e| {
        let err = provider_error(&e);
        log::warn!("provider request {} failed: {}", method, err);
        err
    })
}

fn decode_accounts(value: JsValue) -> Result<Vec<String>> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AppError::InvalidResponse(format!("accounts: {}", e)))
}

fn expect_string(value: JsValue, what: &str) -> Result<String> {
    value
        .as_string()
        .ok_or_else(|| AppError::InvalidResponse(format!("{} is not a string", what)))
}

/// Ask the user to approve account access (`eth_requestAccounts`).
pub async fn request_accounts() -> Result<Vec<String>> {
    decode_accounts(request("eth_requestAccounts", Array::new()).await?)
}

/// Accounts already authorised for this site, without prompting.
pub async fn list_accounts() -> Result<Vec<String>> {
    decode_accounts(request("eth_accounts", Array::new()).await?)
}

/// Native balance of `address` in wei.
pub async fn get_balance(address: &str) -> Result<u128> {
    let params = Array::of2(&JsValue::from_str(address), &JsValue::from_str("latest"));
    let raw = expect_string(request("eth_getBalance", params).await?, "balance")?;
    parse_hex_quantity(&raw)
}

pub async fn get_chain_id() -> Result<u64> {
    let raw = expect_string(request("eth_chainId", Array::new()).await?, "chain id")?;
    parse_chain_id(&raw)
}

/// Switch the wallet to `network`, adding the chain first if the wallet
/// does not know it.
pub async fn switch_chain(network: &NetworkConfig) -> Result<()> {
    let switch = SwitchChainParams {
        chain_id: network.chain_id_hex(),
    };
    let params = serde_wasm_bindgen::to_value(&switch)
        .map_err(|e| AppError::InvalidResponse(e.to_string()))?;

    match request("wallet_switchEthereumChain", Array::of1(&params)).await {
        Ok(_) => Ok(()),
        Err(AppError::Provider { code: UNRECOGNIZED_CHAIN_CODE, .. }) => {
            log::info!("{} not known to wallet, adding it", network.name);
            let add = serde_wasm_bindgen::to_value(&AddChainParams::from(network))
                .map_err(|e| AppError::InvalidResponse(e.to_string()))?;
            request("wallet_addEthereumChain", Array::of1(&add)).await?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Register an `accountsChanged` handler. Returns false when the provider
/// does not support events.
pub fn on_accounts_changed(mut handler: impl FnMut(Vec<String>) + 'static) -> bool {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        match decode_accounts(value) {
            Ok(accounts) => handler(accounts),
            Err(e) => log::warn!("ignoring accountsChanged payload: {}", e),
        }
    });
    subscribeProvider("accountsChanged", &callback.into_js_value())
}

/// Register a `chainChanged` handler receiving the raw hex chain id.
pub fn on_chain_changed(mut handler: impl FnMut(String) + 'static) -> bool {
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        match value.as_string() {
            Some(chain_id) => handler(chain_id),
            None => log::warn!("ignoring non-string chainChanged payload"),
        }
    });
    subscribeProvider("chainChanged", &callback.into_js_value())
}

/// Detach every handler registered through this module.
pub fn unsubscribe_all() {
    unsubscribeProviderAll();
}

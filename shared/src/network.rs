//! Network presets and chain id handling.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils::parse_hex_quantity;

/// Chain id of Base mainnet.
pub const BASE_CHAIN_ID: u64 = 8453;

/// EVM network the dashboard targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub currency: String,
    pub explorer_url: String,
    pub rpc_url: String,
}

impl NetworkConfig {
    /// Base mainnet.
    pub fn base() -> Self {
        Self {
            chain_id: BASE_CHAIN_ID,
            name: "Base".to_string(),
            currency: "ETH".to_string(),
            explorer_url: "https://basescan.org".to_string(),
            rpc_url: "https://mainnet.base.org".to_string(),
        }
    }

    /// Chain id as the provider expects it in `wallet_switchEthereumChain`.
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }

    pub fn matches(&self, chain_id: Option<u64>) -> bool {
        chain_id == Some(self.chain_id)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::base()
    }
}

/// Parse a chain id reported by a provider.
///
/// `eth_chainId` and `chainChanged` deliver hex (`"0x2105"`); some wallets
/// still send decimal strings.
pub fn parse_chain_id(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    let value = if raw.starts_with("0x") || raw.starts_with("0X") {
        parse_hex_quantity(raw)?
    } else {
        raw.parse::<u128>()
            .map_err(|_| AppError::InvalidResponse(format!("bad chain id {raw:?}")))?
    };

    u64::try_from(value).map_err(|_| AppError::InvalidResponse(format!("chain id out of range: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_preset() {
        let base = NetworkConfig::base();
        assert_eq!(base.chain_id, 8453);
        assert_eq!(base.chain_id_hex(), "0x2105");
        assert_eq!(base.currency, "ETH");
        assert!(base.matches(Some(8453)));
        assert!(!base.matches(Some(1)));
        assert!(!base.matches(None));
    }

    #[test]
    fn test_explorer_url() {
        let base = NetworkConfig::base();
        assert_eq!(
            base.explorer_address_url("0xabc"),
            "https://basescan.org/address/0xabc"
        );
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x2105").unwrap(), 8453);
        assert_eq!(parse_chain_id("0x1").unwrap(), 1);
        assert_eq!(parse_chain_id("8453").unwrap(), 8453);
        assert!(parse_chain_id("base").is_err());
        assert!(parse_chain_id("0xffffffffffffffffffff").is_err());
    }
}

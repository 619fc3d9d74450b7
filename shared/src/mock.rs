//! # Sample Data
//!
//! Fixed datasets standing in for live portfolio and analytics sources.
//! Nothing here talks to a chain or a price feed.

use chrono::{DateTime, Utc};

use crate::dto::{
    allocation, AnalyticsData, Asset, PerformancePoint, PortfolioSnapshot, TransactionVolume,
};

fn asset(
    id: u32,
    symbol: &str,
    name: &str,
    balance: f64,
    value_usd: f64,
    change_24h_pct: f64,
    icon_url: Option<&str>,
) -> Asset {
    Asset {
        id,
        symbol: symbol.to_string(),
        name: name.to_string(),
        balance,
        value_usd,
        change_24h_pct,
        icon_url: icon_url.map(str::to_string),
    }
}

/// Holdings on Base shown for every connected address.
pub fn sample_assets() -> Vec<Asset> {
    vec![
        asset(
            1,
            "ETH",
            "Ethereum",
            2.5,
            4_250.0,
            5.2,
            Some("https://cryptologos.cc/logos/ethereum-eth-logo.png"),
        ),
        asset(
            2,
            "USDC",
            "USD Coin",
            10_000.0,
            10_000.0,
            0.0,
            Some("https://cryptologos.cc/logos/usd-coin-usdc-logo.png"),
        ),
        asset(
            3,
            "DAI",
            "Dai",
            5_500.0,
            5_500.0,
            0.1,
            Some("https://cryptologos.cc/logos/multi-collateral-dai-dai-logo.png"),
        ),
        asset(4, "AERO", "Aerodrome", 1_250.0, 2_125.0, 12.5, None),
    ]
}

pub fn sample_snapshot(address: &str, fetched_at: DateTime<Utc>) -> PortfolioSnapshot {
    PortfolioSnapshot {
        address: address.to_string(),
        assets: sample_assets(),
        fetched_at,
    }
}

pub fn sample_performance() -> Vec<PerformancePoint> {
    [
        ("Jan", 18_500.0),
        ("Feb", 19_200.0),
        ("Mar", 20_100.0),
        ("Apr", 19_800.0),
        ("May", 21_000.0),
        ("Jun", 21_875.0),
    ]
    .into_iter()
    .map(|(label, value)| PerformancePoint {
        label: label.to_string(),
        value,
    })
    .collect()
}

pub fn sample_transactions() -> Vec<TransactionVolume> {
    [
        ("Jan", 5_200.0, 3_400.0),
        ("Feb", 4_800.0, 4_200.0),
        ("Mar", 6_100.0, 3_800.0),
        ("Apr", 5_500.0, 4_900.0),
        ("May", 6_800.0, 4_200.0),
        ("Jun", 7_200.0, 5_100.0),
    ]
    .into_iter()
    .map(|(month, deposits, withdrawals)| TransactionVolume {
        month: month.to_string(),
        deposits,
        withdrawals,
    })
    .collect()
}

pub fn sample_analytics() -> AnalyticsData {
    AnalyticsData {
        allocation: allocation(&sample_assets()),
        performance: sample_performance(),
        transactions: sample_transactions(),
    }
}

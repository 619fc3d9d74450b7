use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A token holding shown in the portfolio table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub balance: f64,
    pub value_usd: f64,
    pub change_24h_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Asset {
    pub fn is_positive(&self) -> bool {
        self.change_24h_pct >= 0.0
    }
}

/// One slice of the allocation chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationSlice {
    pub name: String,
    pub value: f64,
    /// Share of the total, rounded to one decimal place
    pub percentage: f64,
}

/// Holdings of one address at one point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSnapshot {
    pub address: String,
    pub assets: Vec<Asset>,
    pub fetched_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    /// Sum of all asset values, in USD.
    pub fn total_value(&self) -> f64 {
        total_value(&self.assets)
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

pub fn total_value(assets: &[Asset]) -> f64 {
    assets.iter().map(|a| a.value_usd).sum()
}

/// Allocation slices in asset order. An empty or zero-valued portfolio
/// yields zero percentages.
pub fn allocation(assets: &[Asset]) -> Vec<AllocationSlice> {
    let total = total_value(assets);

    assets
        .iter()
        .map(|asset| {
            let percentage = if total > 0.0 {
                (asset.value_usd / total * 1000.0).round() / 10.0
            } else {
                0.0
            };
            AllocationSlice {
                name: asset.symbol.clone(),
                value: asset.value_usd,
                percentage,
            }
        })
        .collect()
}

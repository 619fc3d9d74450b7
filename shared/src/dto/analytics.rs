use serde::{Deserialize, Serialize};

use super::portfolio::AllocationSlice;

/// Portfolio value at the end of a period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformancePoint {
    pub label: String,
    pub value: f64,
}

/// Deposit and withdrawal volume for one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionVolume {
    pub month: String,
    pub deposits: f64,
    pub withdrawals: f64,
}

impl TransactionVolume {
    pub fn net_flow(&self) -> f64 {
        self.deposits - self.withdrawals
    }
}

/// Everything the analytics page draws
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsData {
    pub allocation: Vec<AllocationSlice>,
    pub performance: Vec<PerformancePoint>,
    pub transactions: Vec<TransactionVolume>,
}

impl AnalyticsData {
    /// Change from the first to the last performance point, in percent.
    pub fn performance_change_pct(&self) -> Option<f64> {
        let first = self.performance.first()?.value;
        let last = self.performance.last()?.value;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

//! Portfolio data source
//!
//! There is no indexer behind the dashboard yet: these functions wait for a
//! short artificial delay and hand back the fixed sample datasets.

use gloo_timers::future::TimeoutFuture;
use shared::dto::{AnalyticsData, PortfolioSnapshot};
use shared::error::{AppError, Result};
use shared::mock;

/// Up to this much extra delay is added on top of the configured latency.
const LATENCY_JITTER_MS: f64 = 400.0;

async fn simulate_latency(base_ms: u32) {
    let jitter = (js_sys::Math::random() * LATENCY_JITTER_MS) as u32;
    TimeoutFuture::new(base_ms.saturating_add(jitter)).await;
}

/// Holdings of `address` on Base.
pub async fn fetch_portfolio(address: &str, latency_ms: u32) -> Result<PortfolioSnapshot> {
    if address.is_empty() {
        return Err(AppError::DataUnavailable("no wallet address".to_string()));
    }

    log::debug!("fetching sample portfolio for {}", address);
    simulate_latency(latency_ms).await;

    let snapshot = mock::sample_snapshot(address, chrono::Utc::now());
    log::info!(
        "portfolio loaded: {} assets, total {:.2}",
        snapshot.asset_count(),
        snapshot.total_value()
    );
    Ok(snapshot)
}

/// Chart datasets for the analytics page.
pub async fn fetch_analytics(latency_ms: u32) -> Result<AnalyticsData> {
    log::debug!("fetching sample analytics");
    simulate_latency(latency_ms).await;

    let data = mock::sample_analytics();
    if data.allocation.is_empty() {
        return Err(AppError::DataUnavailable("no allocation data".to_string()));
    }
    Ok(data)
}

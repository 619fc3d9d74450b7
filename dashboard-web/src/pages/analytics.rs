//! Analytics page: allocation, value distribution, performance and
//! transaction activity charts

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::AnalyticsData;
use shared::error::AppError;
use shared::utils::{format_percentage, format_usd};

use super::{ConnectPlaceholder, LoadFailure};
use crate::components::{BarChart, BarSeries, LineChart, Loading, PieChart};
use crate::config::use_app_config;
use crate::services::portfolio::fetch_analytics;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{DEPOSIT_COLOR, PRIMARY_COLOR, WITHDRAWAL_COLOR};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let latency_ms = use_app_config().mock_latency_ms;
    let connected = Memo::new(move |_| wallet_ctx.is_connected());

    let data = RwSignal::new(None::<AnalyticsData>);
    let load_error = RwSignal::new(None::<AppError>);

    let load = move || {
        data.set(None);
        load_error.set(None);
        spawn_local(async move {
            match fetch_analytics(latency_ms).await {
                Ok(analytics) => data.set(Some(analytics)),
                Err(e) => {
                    log::warn!("analytics load failed: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    };

    Effect::new(move |_| {
        if connected.get() {
            load();
        }
    });

    move || {
        if !connected.get() {
            return view! {
                <ConnectPlaceholder message="Please connect your wallet to view analytics"/>
            }
            .into_any();
        }

        if let Some(error) = load_error.get() {
            return view! {
                <div class="page">
                    <h1 class="page-title">"Portfolio Analytics"</h1>
                    <LoadFailure error=error on_retry=load/>
                </div>
            }
            .into_any();
        }

        match data.get() {
            Some(analytics) => view! { <AnalyticsCharts data=analytics/> }.into_any(),
            None => view! {
                <div class="page">
                    <h1 class="page-title">"Portfolio Analytics"</h1>
                    <Loading message="Crunching numbers..."/>
                </div>
            }
            .into_any(),
        }
    }
}

#[component]
fn AnalyticsCharts(data: AnalyticsData) -> impl IntoView {
    let change = data
        .performance_change_pct()
        .zip(data.performance.first())
        .map(|(pct, first)| format!("{} since {}", format_percentage(pct, 1), first.label));
    let AnalyticsData { allocation, performance, transactions } = data;

    let asset_names: Vec<String> = allocation.iter().map(|s| s.name.clone()).collect();
    let value_series = vec![BarSeries {
        label: "Value (USD)".to_string(),
        color: PRIMARY_COLOR,
        values: allocation.iter().map(|s| s.value).collect(),
    }];

    let net_flow: f64 = transactions.iter().map(|t| t.net_flow()).sum();
    let net_flow_label = format!(
        "Net flow {}{}",
        if net_flow < 0.0 { "-" } else { "+" },
        format_usd(net_flow.abs())
    );

    let months: Vec<String> = transactions.iter().map(|t| t.month.clone()).collect();
    let activity_series = vec![
        BarSeries {
            label: "Deposits".to_string(),
            color: DEPOSIT_COLOR,
            values: transactions.iter().map(|t| t.deposits).collect(),
        },
        BarSeries {
            label: "Withdrawals".to_string(),
            color: WITHDRAWAL_COLOR,
            values: transactions.iter().map(|t| t.withdrawals).collect(),
        },
    ];

    view! {
        <div class="page">
            <h1 class="page-title">"Portfolio Analytics"</h1>

            <div class="chart-grid">
                <div class="card">
                    <h2 class="card-title">"Asset Allocation"</h2>
                    <PieChart slices=allocation/>
                </div>
                <div class="card">
                    <h2 class="card-title">"Asset Value Distribution"</h2>
                    <BarChart categories=asset_names series=value_series/>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Portfolio Value Over Time"</h2>
                    {change.map(|c| view! { <span class="muted">{c}</span> })}
                </div>
                <LineChart points=performance series_label="Portfolio value (USD)"/>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Transaction Activity"</h2>
                    <span class="muted">{net_flow_label}</span>
                </div>
                <BarChart categories=months series=activity_series/>
            </div>
        </div>
    }
}

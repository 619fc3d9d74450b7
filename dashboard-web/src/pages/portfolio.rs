//! Portfolio page: summary cards and the holdings table

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::{Asset, PortfolioSnapshot};
use shared::error::AppError;
use shared::utils::{format_usd, truncate_address};

use super::{ConnectPlaceholder, LoadFailure};
use crate::components::{CardSkeleton, Loading, StatCard};
use crate::config::use_app_config;
use crate::services::portfolio::fetch_portfolio;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::{change_chip, format_balance, format_token_amount};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let latency_ms = use_app_config().mock_latency_ms;
    // Memos so re-announced accounts do not trigger a reload
    let address = Memo::new(move |_| wallet_ctx.address());
    let connected = Memo::new(move |_| wallet_ctx.is_connected());

    let snapshot = RwSignal::new(None::<PortfolioSnapshot>);
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<AppError>);

    let load = move |address: String| {
        loading.set(true);
        load_error.set(None);
        spawn_local(async move {
            let result = fetch_portfolio(&address, latency_ms).await;

            // The account may have switched while we waited.
            let still_current = wallet_ctx
                .wallet
                .with_untracked(|state| state.address() == Some(address.as_str()));
            if !still_current {
                return;
            }

            match result {
                Ok(data) => snapshot.set(Some(data)),
                Err(e) => {
                    log::warn!("portfolio load failed: {}", e);
                    load_error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| match address.get() {
        Some(address) => load(address),
        None => {
            snapshot.set(None);
            load_error.set(None);
            loading.set(false);
        }
    });

    let retry = move || {
        if let Some(address) = wallet_ctx
            .wallet
            .with_untracked(|state| state.address().map(str::to_string))
        {
            load(address);
        }
    };

    move || {
        if !connected.get() {
            return view! {
                <ConnectPlaceholder message="Please connect your wallet to view your portfolio"/>
            }
            .into_any();
        }

        if let Some(error) = load_error.get() {
            return view! {
                <div class="page">
                    <h1 class="page-title">"Portfolio Dashboard"</h1>
                    <LoadFailure error=error on_retry=retry/>
                </div>
            }
            .into_any();
        }

        match snapshot.get() {
            Some(data) if !loading.get() => view! { <PortfolioOverview snapshot=data/> }.into_any(),
            _ => view! {
                <div class="page">
                    <h1 class="page-title">"Portfolio Dashboard"</h1>
                    <CardSkeleton/>
                    <Loading message="Loading your assets..."/>
                </div>
            }
            .into_any(),
        }
    }
}

#[component]
fn PortfolioOverview(snapshot: PortfolioSnapshot) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let network = wallet_ctx.network();

    let total = format_usd(snapshot.total_value());
    let asset_count = snapshot.asset_count();
    let explorer_url = network.explorer_address_url(&snapshot.address);
    let short_address = truncate_address(&snapshot.address);
    let fetched_at = snapshot.fetched_at.format("%H:%M:%S UTC").to_string();
    let currency = network.currency.clone();
    let balance_title = format!("Wallet Balance ({})", currency);

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Portfolio Dashboard"</h1>
                <a class="explorer-link" href=explorer_url target="_blank" rel="noopener noreferrer">
                    {format!("{} on {}", short_address, network.name)}
                </a>
            </div>

            <div class="stat-grid">
                <StatCard title="Total Portfolio Value" highlight=true>{total}</StatCard>
                <StatCard title=balance_title>
                    {move || wallet_ctx.balance.with(|b| format_balance(b.as_deref(), &currency))}
                </StatCard>
                <StatCard title="Total Assets">{asset_count}</StatCard>
            </div>

            <div class="card">
                <h2 class="card-title">"Your Assets on Base"</h2>
                <table class="asset-table">
                    <thead>
                        <tr>
                            <th>"Asset"</th>
                            <th class="numeric">"Balance"</th>
                            <th class="numeric">"Value"</th>
                            <th class="numeric">"24h Change"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {snapshot.assets.into_iter().map(|asset| view! { <AssetRow asset=asset/> }).collect_view()}
                    </tbody>
                </table>
                <p class="muted">{format!("Updated {}", fetched_at)}</p>
            </div>
        </div>
    }
}

#[component]
fn AssetRow(asset: Asset) -> impl IntoView {
    let (change, chip_class) = change_chip(asset.change_24h_pct);
    let trend = if asset.is_positive() { "▲" } else { "▼" };
    let initial = asset.symbol.chars().next().unwrap_or('?').to_string();

    view! {
        <tr>
            <td>
                <div class="asset-cell">
                    {match asset.icon_url {
                        Some(url) => view! { <img class="asset-icon" src=url alt=asset.symbol.clone()/> }.into_any(),
                        None => view! { <span class="asset-icon asset-icon-fallback">{initial}</span> }.into_any(),
                    }}
                    <div>
                        <div class="asset-symbol">{asset.symbol.clone()}</div>
                        <div class="asset-name">{asset.name}</div>
                    </div>
                </div>
            </td>
            <td class="numeric">{format!("{} {}", format_token_amount(asset.balance), asset.symbol)}</td>
            <td class="numeric">{format_usd(asset.value_usd)}</td>
            <td class="numeric">
                <span class=chip_class>{format!("{} {}", trend, change)}</span>
            </td>
        </tr>
    }
}

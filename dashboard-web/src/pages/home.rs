//! Landing page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::wallet::use_wallet_context;
use crate::utils::routes::AppRoute;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "◎",
        "Wallet Management",
        "Connect your wallet and manage your Base assets seamlessly",
    ),
    (
        "↗",
        "Portfolio Tracking",
        "Monitor your portfolio performance and asset allocation in real-time",
    ),
    (
        "▤",
        "Advanced Analytics",
        "Visualize your portfolio with interactive charts and insights",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let navigate = use_navigate();
    let connected = Memo::new(move |_| wallet_ctx.is_connected());

    view! {
        <section class="hero">
            <h1 class="hero-title">"Welcome to Asseti"</h1>
            <p class="hero-tagline">
                "Your comprehensive portfolio management solution on Base Network"
            </p>

            {move || {
                if connected.get() {
                    let to_portfolio = navigate.clone();
                    let to_analytics = navigate.clone();
                    view! {
                        <div class="hero-actions">
                            <button
                                class="btn btn-large"
                                on:click=move |_| to_portfolio(AppRoute::Portfolio.path(), Default::default())
                            >
                                "View Portfolio"
                            </button>
                            <button
                                class="btn btn-outlined btn-large"
                                on:click=move |_| to_analytics(AppRoute::Analytics.path(), Default::default())
                            >
                                "View Analytics"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <p class="alert alert-warning hero-notice">"Connect your wallet to get started"</p>
                    }
                    .into_any()
                }
            }}

            <div class="feature-grid">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="card feature-card">
                                <div class="feature-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

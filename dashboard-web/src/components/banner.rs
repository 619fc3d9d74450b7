//! Error banner and wrong-network notice shown under the app bar

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || {
        wallet_ctx.error.get().map(|message| {
            view! {
                <div class="alert alert-error" role="alert">
                    <span>{message}</span>
                    <button class="alert-close" on:click=move |_| wallet_ctx.dismiss_error()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

#[component]
pub fn NetworkNotice() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let network_name = wallet_ctx.network().name;

    view! {
        <Show when=move || wallet_ctx.is_wrong_network()>
            <div class="alert alert-warning">
                <span>{format!("Your wallet is on another network. Asseti shows assets on {}.", network_name)}</span>
                <button class="btn btn-small" on:click=move |_| spawn_local(wallet_ctx.switch_network())>
                    {format!("Switch to {}", network_name)}
                </button>
            </div>
        </Show>
    }
}

/// Inline message with a retry action, for per-page data failures.
#[component]
pub fn RetryBanner(
    #[prop(into)] message: String,
    on_retry: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            <span>{message}</span>
            <button class="btn btn-small" on:click=move |_| on_retry()>"Retry"</button>
        </div>
    }
}

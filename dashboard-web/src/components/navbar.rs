//! Navigation Bar Component
//!
//! Brand, route tabs and the wallet connect/disconnect control.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::APP_NAME;
use crate::utils::routes::AppRoute;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let active_route = Memo::new(move |_| location.pathname.with(|path| AppRoute::from_path(path)));

    view! {
        <nav class="app-bar">
            <div class="app-bar-inner">
                <A href="/" {..} class="nav-link-clean">
                    <span class="brand">{APP_NAME}</span>
                </A>

                <div class="tabs">
                    {AppRoute::ALL
                        .into_iter()
                        .map(|route| {
                            view! {
                                <A href=route.path() {..} class=move || {
                                    if active_route.get() == Some(route) { "tab tab-active" } else { "tab" }
                                }>
                                    {route.label()}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                <WalletButton/>
            </div>
        </nav>
    }
}

#[component]
fn WalletButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let on_connect = move |_| spawn_local(wallet_ctx.connect());
    let on_disconnect = move |_| wallet_ctx.disconnect();

    move || match wallet_ctx.address() {
        Some(address) => view! {
            <div class="wallet-info">
                <span class="wallet-address" title=address.clone()>{truncate_address(&address)}</span>
                <button class="btn btn-outlined" on:click=on_disconnect>"Disconnect"</button>
            </div>
        }
        .into_any(),
        None => view! {
            <button
                class="btn"
                disabled=move || wallet_ctx.is_connecting()
                on:click=on_connect
            >
                {move || if wallet_ctx.is_connecting() { "Connecting..." } else { "Connect Wallet" }}
            </button>
        }
        .into_any(),
    }
}

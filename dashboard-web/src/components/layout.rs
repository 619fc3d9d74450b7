//! Page shell: app bar, banners, routed content and footer

use leptos::prelude::*;

use super::banner::{ErrorBanner, NetworkNotice};
use super::navbar::Navbar;
use crate::utils::constants::FOOTER_TEXT;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-container">
            <Navbar/>
            <div class="banners">
                <ErrorBanner/>
                <NetworkNotice/>
            </div>
            <main class="content">{children()}</main>
            <footer class="footer">
                <p>{FOOTER_TEXT}</p>
            </footer>
        </div>
    }
}

//! Asseti Web App - Leptos Frontend
//!
//! Root component: provides configuration and wallet state, then routes the
//! three views inside the layout and the error boundary.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{AppErrorBoundary, Layout};
use crate::config::{provide_app_config, AppConfig};
use crate::pages::{AnalyticsPage, HomePage, PortfolioPage};
use crate::state::wallet::provide_wallet_context;
use crate::utils::routes::AppRoute;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let network = config.network.clone();
    provide_app_config(config);
    provide_wallet_context(network);

    view! {
        <Router>
            <AppErrorBoundary>
                <Layout>
                    <Routes fallback=UnknownRoute>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/portfolio") view=PortfolioPage/>
                        <Route path=path!("/analytics") view=AnalyticsPage/>
                    </Routes>
                </Layout>
            </AppErrorBoundary>
        </Router>
    }
}

/// Sends any path outside the route table back to the landing page.
#[component]
fn UnknownRoute() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    let target = AppRoute::redirect_for(&path).unwrap_or(AppRoute::Home.path());
    log::info!("unknown path {}, redirecting to {}", path, target);

    view! { <Redirect path=target/> }
}

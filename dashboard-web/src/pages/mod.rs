//! Pages

pub mod analytics;
pub mod home;
pub mod portfolio;

pub use analytics::AnalyticsPage;
pub use home::HomePage;
pub use portfolio::PortfolioPage;

use leptos::prelude::*;
use shared::error::AppError;

use crate::components::RetryBanner;

/// Centered notice shown by data pages while no wallet is connected
#[component]
fn ConnectPlaceholder(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="placeholder">
            <p class="placeholder-text">{message}</p>
        </div>
    }
}

/// Data load failure: a retry banner when trying again can help, a plain
/// alert otherwise.
#[component]
fn LoadFailure(error: AppError, on_retry: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    if error.is_retryable() {
        view! { <RetryBanner message=error.to_string() on_retry=on_retry/> }.into_any()
    } else {
        view! { <div class="alert alert-error" role="alert">{error.to_string()}</div> }.into_any()
    }
}

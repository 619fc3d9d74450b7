//! Loading Component
//!
//! Spinners and skeleton states while mock data is "fetched".

use leptos::prelude::*;

/// Centered spinner with an optional caption
#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
            {message.map(|m| view! { <p class="loading-text">{m}</p> })}
        </div>
    }
}

/// Skeleton loader for a stat card row
#[component]
pub fn CardSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {(0..count)
                .map(|_| view! {
                    <div class="card skeleton">
                        <div class="skeleton-line skeleton-short"></div>
                        <div class="skeleton-line skeleton-wide"></div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

//! Stat Card Component
//!
//! Single headline figure with a caption, used on the portfolio summary row.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Caption above the value
    #[prop(into)]
    title: String,
    /// Render the card with the brand fill
    #[prop(optional)]
    highlight: bool,
    children: Children,
) -> impl IntoView {
    let class = if highlight { "card stat-card stat-card-primary" } else { "card stat-card" };

    view! {
        <div class=class>
            <span class="stat-title">{title}</span>
            <span class="stat-value">{children()}</span>
        </div>
    }
}

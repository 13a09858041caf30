//! Category Detail Cards
//!
//! One card per category: bucket counts and a completion bar.

use leptos::prelude::*;

use dashboard_core::view_model::CategoryCard;

#[component]
pub fn CategoryCards(cards: Vec<CategoryCard>) -> impl IntoView {
    view! {
        <div class="chart-card full-width">
            <h2>"Category Details"</h2>
            <div class="category-cards">
                {cards.into_iter().map(|card| view! { <CategoryDetailCard card=card /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CategoryDetailCard(card: CategoryCard) -> impl IntoView {
    let bar_style = format!("width: {}%; background-color: {}", card.bar_width(), card.color);

    view! {
        <div class="category-card" style=format!("border-top-color: {}", card.color)>
            <div class="category-card-header">
                <h3>{card.name}</h3>
                <span class="category-total">{card.total}</span>
            </div>
            <div class="progress-bar">
                <div class="progress-fill" style=bar_style></div>
            </div>
            <p class="completion">{format!("{}% complete", card.completion)}</p>
            <ul class="category-stats">
                <li><span>"Done"</span><strong>{card.done}</strong></li>
                <li><span>"In Progress"</span><strong>{card.in_progress}</strong></li>
                <li><span>"Backlog"</span><strong>{card.backlog}</strong></li>
                <li><span>"Other"</span><strong>{card.other}</strong></li>
            </ul>
        </div>
    }
}

//! Weekly Trends Component
//!
//! Hidden entirely while there is no total series.

use leptos::prelude::*;

use dashboard_core::chart::palette_color;
use dashboard_core::view_model::{TrendCard, TrendSeries, TrendsView};

use crate::components::LineChart;
use crate::store::{use_dashboard_store, DashboardDataStoreFields};

#[component]
pub fn TrendsPanel() -> impl IntoView {
    let store = use_dashboard_store();

    move || store.trends().get().map(|trends| view! { <TrendsSection trends=trends /> })
}

#[component]
fn TrendsSection(trends: TrendsView) -> impl IntoView {
    let weeks = trends.weeks();
    let max = trends.max_count();
    let total = vec![TrendSeries {
        category: "Issues Created".to_string(),
        color: palette_color(0),
        points: trends.total.clone(),
    }];

    view! {
        <div class="chart-card full-width">
            <h2>"Weekly Issue Trend"</h2>
            <LineChart weeks=weeks.clone() series=total max=max />
        </div>

        <div class="chart-card full-width">
            <h2>"Weekly Trend by Category"</h2>
            <LineChart weeks=weeks series=trends.by_category max=max />
        </div>

        <div class="chart-card full-width">
            <h2>"This Week vs Last Week"</h2>
            <div class="trend-cards">
                {trends.cards.into_iter().map(|card| view! { <TrendDeltaCard card=card /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TrendDeltaCard(card: TrendCard) -> impl IntoView {
    view! {
        <div class="trend-card">
            <h4>{card.category}</h4>
            <p class="trend-count">{card.latest_count}" issues"</p>
            {card.change.map(|change| view! {
                <p class=format!("trend-change {}", change.class()) title=change.signed()>
                    {change.label()}
                </p>
            })}
        </div>
    }
}

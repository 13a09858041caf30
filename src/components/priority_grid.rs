//! Priority Distribution Component

use leptos::prelude::*;

use dashboard_core::view_model::{priority_badge_class, PriorityShare};

#[component]
pub fn PriorityGrid(priorities: Vec<PriorityShare>) -> impl IntoView {
    view! {
        <div class="chart-card full-width">
            <h2>"Priority Distribution"</h2>
            <div class="priority-grid">
                {priorities.into_iter().map(|priority| {
                    let badge = priority_badge_class(&priority.name);
                    let share = priority.share_label();
                    view! {
                        <div class="priority-item">
                            <span class=badge>{priority.name}</span>
                            <span class="priority-count">{priority.value}</span>
                            <span class="priority-share">{share}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

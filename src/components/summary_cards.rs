//! Summary Cards Component

use leptos::prelude::*;

use dashboard_core::view_model::StatusSummary;

#[component]
pub fn SummaryCards(summary: StatusSummary, total: u64) -> impl IntoView {
    view! {
        <div class="summary-cards">
            <div class="summary-card total">
                <h3>"Total Issues"</h3>
                <p class="summary-value">{total}</p>
            </div>
            <div class="summary-card completed">
                <h3>"Completed"</h3>
                <p class="summary-value">{summary.completed}</p>
                <p class="summary-detail">{format!("{}% completion rate", summary.completion_rate)}</p>
            </div>
            <div class="summary-card in-progress">
                <h3>"In Progress"</h3>
                <p class="summary-value">{summary.in_progress}</p>
            </div>
            <div class="summary-card backlog">
                <h3>"Backlog"</h3>
                <p class="summary-value">{summary.backlog}</p>
            </div>
        </div>
    }
}

//! Issues Table Component
//!
//! Every issue with a tracker link, status and priority badges, and a
//! client-side search box.

use leptos::prelude::*;

use dashboard_core::models::Issue;
use dashboard_core::view_model::{
    filter_issues, issue_row_key, priority_badge_class, status_badge_class,
};

use crate::context::use_session;
use crate::store::{use_dashboard_store, DashboardDataStoreFields};

#[component]
pub fn IssuesTable() -> impl IntoView {
    let store = use_dashboard_store();
    let config = StoredValue::new(use_session().config());
    let (query, set_query) = signal(String::new());

    let visible = move || {
        let query = query.get();
        filter_issues(&store.issues().read(), &query)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let heading = move || {
        let total = store.issues().read().len();
        let query = query.get();
        if query.trim().is_empty() {
            format!("All Issues ({})", total)
        } else {
            let shown = filter_issues(&store.issues().read(), &query).len();
            format!("All Issues ({} of {})", shown, total)
        }
    };

    view! {
        <div class="chart-card full-width">
            <div class="table-header">
                <h2>{heading}</h2>
                <input
                    type="search"
                    class="issue-search"
                    placeholder="Search issues..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>
            <div class="issues-table-container">
                <table class="issues-table">
                    <thead>
                        <tr>
                            <th>"Key"</th>
                            <th>"Summary"</th>
                            <th>"Status"</th>
                            <th>"Category"</th>
                            <th>"Priority"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=issue_row_key
                            children=move |issue| {
                                let url = config.with_value(|c| c.issue_url(&issue.issue_key));
                                view! { <IssueRow issue=issue url=url /> }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn IssueRow(issue: Issue, url: String) -> impl IntoView {
    let status_class = status_badge_class(&issue.status);
    let priority_class = priority_badge_class(&issue.priority);

    view! {
        <tr>
            <td class="issue-key">
                <a href=url target="_blank" rel="noopener noreferrer">{issue.issue_key}</a>
            </td>
            <td class="issue-summary">{issue.summary}</td>
            <td><span class=status_class>{issue.status}</span></td>
            <td class="issue-category">{issue.category}</td>
            <td><span class=priority_class>{issue.priority}</span></td>
        </tr>
    }
}

//! Dashboard Page Component
//!
//! Owns the dashboard controller for as long as the page is mounted:
//! initial load, the scheduled poll and manual refresh.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsValue;

use dashboard_core::{DashboardController, Phase};

use crate::api::HttpApi;
use crate::browser::BrowserClock;
use crate::components::{
    CategoryCards, CategoryPie, CategoryVolume, ErrorPanel, IssuesTable, Loading, PriorityGrid,
    StatusBars, SummaryCards, TrendsPanel,
};
use crate::context::use_session;
use crate::store::{store_apply, use_dashboard_store, DashboardData, DashboardDataStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_session();
    let config = ctx.config();

    let store = Store::new(DashboardData::default());
    provide_context(store);

    let controller = DashboardController::new(HttpApi::new(config.clone()), BrowserClock, &config);
    controller.subscribe(move |state| store_apply(&store, state));

    // Stop the poll and drop late responses once the page goes away
    let mount = controller.mount();
    on_cleanup(move || mount.unmount());

    spawn_local({
        let controller = controller.clone();
        async move { controller.load().await }
    });
    spawn_local(controller.poll());

    let controller = StoredValue::new_local(controller);

    let retry = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move { controller.load().await });
    });
    let refresh = Callback::new(move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move {
            if let Err(e) = controller.refresh().await {
                log::debug!("[DASHBOARD] refresh not completed: {}", e);
            }
        });
    });
    let dismiss = Callback::new(move |_: ()| controller.with_value(|c| c.dismiss_refresh_error()));

    move || match store.phase().get() {
        Phase::Loading => view! { <Loading message="Loading dashboard data..." /> }.into_any(),
        Phase::Error(message) => view! { <ErrorPanel message=message on_retry=retry /> }.into_any(),
        Phase::Ready => view! { <DashboardBody on_refresh=refresh on_dismiss=dismiss /> }.into_any(),
    }
}

#[component]
fn DashboardBody(on_refresh: Callback<()>, on_dismiss: Callback<()>) -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="dashboard-container">
            <div class="dashboard-content">
                <DashboardHeader on_refresh=on_refresh />

                {move || store.refresh_error().get().map(|message| view! {
                    <div class="refresh-error" role="alert">
                        <span>{message}</span>
                        <button class="dismiss-button" on:click=move |_| on_dismiss.run(())>"×"</button>
                    </div>
                })}

                {move || match store.view().get() {
                    Some(data) => view! {
                        <SummaryCards summary=data.summary.clone() total=data.total_issues />
                        <div class="charts-grid">
                            <CategoryPie categories=data.categories.clone() />
                            <StatusBars statuses=data.statuses.clone() />
                        </div>
                        <CategoryVolume categories=data.categories_by_volume() />
                        <CategoryCards cards=data.category_cards.clone() />
                        <PriorityGrid priorities=data.priorities.clone() />
                    }.into_any(),
                    None => view! {
                        <p class="empty-state">"Dashboard summary is not available yet."</p>
                    }.into_any(),
                }}

                <TrendsPanel />
                <IssuesTable />
            </div>
        </div>
    }
}

#[component]
fn DashboardHeader(on_refresh: Callback<()>) -> impl IntoView {
    let store = use_dashboard_store();
    let ctx = use_session();

    let total = move || store.view().with(|v| v.as_ref().map(|v| v.total_issues));
    let last_updated = move || store.view().with(|v| v.as_ref().and_then(|v| v.last_updated.clone()));
    let refreshing = move || store.refreshing().get();

    view! {
        <header class="dashboard-header">
            <div class="header-content">
                <div>
                    <h1>"EPIC System Issues Dashboard"</h1>
                    {move || total().map(|total| view! {
                        <p class="subtitle">
                            {format!("Comprehensive analysis of {} issues with automated categorization", total)}
                        </p>
                    })}
                    {move || last_updated().map(|stamp| view! {
                        <p class="last-updated">"Last updated: " {format_timestamp(&stamp)}</p>
                    })}
                </div>
                <div class="header-actions">
                    <button
                        class=move || if refreshing() { "refresh-button refreshing" } else { "refresh-button" }
                        disabled=refreshing
                        on:click=move |_| on_refresh.run(())
                    >
                        {move || if refreshing() { "Refreshing..." } else { "🔄 Refresh Data" }}
                    </button>
                    <button class="logout-button" on:click=move |_| ctx.logout()>
                        "Log out"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Backend timestamp in the browser's locale; unparseable input is shown as-is
fn format_timestamp(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

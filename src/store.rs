//! Dashboard View Store
//!
//! Mirror of the controller's `DashboardState` with field-level reactivity,
//! so a silent poll only re-renders what actually changed.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_core::models::Issue;
use dashboard_core::view_model::{DashboardView, TrendsView};
use dashboard_core::{DashboardState, Phase};

#[derive(Clone, Debug, Store)]
pub struct DashboardData {
    pub phase: Phase,
    /// Summary, charts and category cards
    pub view: Option<DashboardView>,
    pub issues: Vec<Issue>,
    /// None while the trends dataset has no weeks
    pub trends: Option<TrendsView>,
    pub refreshing: bool,
    pub refresh_error: Option<String>,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            view: None,
            issues: Vec::new(),
            trends: None,
            refreshing: false,
            refresh_error: None,
        }
    }
}

pub type DashboardStore = Store<DashboardData>;

pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy controller state into the store, writing only the fields that differ
pub fn store_apply(store: &DashboardStore, state: &DashboardState) {
    if *store.phase().read_untracked() != state.phase {
        *store.phase().write() = state.phase.clone();
    }
    if *store.view().read_untracked() != state.view {
        *store.view().write() = state.view.clone();
    }
    if *store.issues().read_untracked() != state.issues {
        *store.issues().write() = state.issues.clone();
    }
    if *store.trends().read_untracked() != state.trends {
        *store.trends().write() = state.trends.clone();
    }
    if *store.refreshing().read_untracked() != state.refreshing {
        *store.refreshing().write() = state.refreshing;
    }
    if *store.refresh_error().read_untracked() != state.refresh_error {
        *store.refresh_error().write() = state.refresh_error.clone();
    }
}

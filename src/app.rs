//! Main Application Component
//!
//! Session gate: the login view or the dashboard, decided by the
//! persisted auth flag.

use leptos::prelude::*;

use dashboard_core::{DashboardConfig, SessionState};

use crate::components::{DashboardPage, Loading, LoginPage};
use crate::context::SessionContext;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let session = signal(SessionState::Checking);
    let ctx = SessionContext::new(config, session);
    provide_context(ctx);

    // Restore persisted session once on mount
    Effect::new(move |_| {
        log::debug!("[APP] restoring session");
        ctx.restore();
    });

    view! {
        <div class="App">
            {move || match ctx.session.get() {
                SessionState::Checking => view! { <Loading message="Checking session..." /> }.into_any(),
                SessionState::Anonymous => view! { <LoginPage /> }.into_any(),
                SessionState::Authenticated => view! { <DashboardPage /> }.into_any(),
            }}
        </div>
    }
}

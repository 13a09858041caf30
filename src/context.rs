//! Application Context
//!
//! Session state and configuration shared via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_core::{DashboardConfig, SessionGate, SessionState};

use crate::browser::LocalFlagStore;

pub type BrowserSession = SessionGate<LocalFlagStore>;

/// App-wide session handle provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Which top-level view is shown - read
    pub session: ReadSignal<SessionState>,
    /// Which top-level view is shown - write
    set_session: WriteSignal<SessionState>,
    gate: StoredValue<BrowserSession>,
    config: StoredValue<DashboardConfig>,
}

impl SessionContext {
    pub fn new(
        config: DashboardConfig,
        session: (ReadSignal<SessionState>, WriteSignal<SessionState>),
    ) -> Self {
        let gate = SessionGate::new(LocalFlagStore, config.auth_storage_key.clone());
        Self {
            session: session.0,
            set_session: session.1,
            gate: StoredValue::new(gate),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    pub fn gate(&self) -> BrowserSession {
        self.gate.get_value()
    }

    /// Read the persisted flag and leave the checking state
    pub fn restore(&self) {
        let gate = self.gate();
        let set_session = self.set_session;
        spawn_local(async move {
            set_session.set(gate.restore().await);
        });
    }

    /// Switch to the dashboard once the login flow has stored the flag
    pub fn authenticated(&self) {
        self.set_session.set(SessionState::Authenticated);
    }

    pub fn logout(&self) {
        let gate = self.gate();
        let set_session = self.set_session;
        spawn_local(async move {
            set_session.set(gate.logout().await);
        });
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

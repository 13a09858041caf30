//! Dashboard Core
//!
//! Platform-independent half of the EPIC issues dashboard: wire models,
//! the derivation stage between raw API payloads and render models, chart
//! geometry, configuration and the controllers behind the login and
//! dashboard views.
//!
//! Browser concerns (HTTP, `localStorage`, timers) are reached only through
//! the [`DashboardApi`], [`FlagStore`] and [`Clock`] traits.

pub mod api;
pub mod chart;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod login;
pub mod models;
pub mod session;
pub mod storage;
pub mod view_model;

mod notify;

#[cfg(test)]
mod testing;

pub use api::DashboardApi;
pub use clock::Clock;
pub use config::DashboardConfig;
pub use dashboard::{DashboardController, DashboardState, Mount, Phase};
pub use error::{ApiError, ApiResult, LoginError, RefreshError, StorageError};
pub use login::{LoginController, LoginForm};
pub use session::{SessionGate, SessionState};
pub use storage::{FlagStore, MemoryFlagStore};

//! Build-time Configuration
//!
//! Values are baked in when the bundle is built, e.g.
//! `DASHBOARD_API_URL=https://api.example.com trunk build --release`.

use dashboard_core::config::{
    ENV_API_URL, ENV_LOG_LEVEL, ENV_POLL_SECS, ENV_REFRESH_DELAY_SECS, ENV_TRACKER_URL,
};
use dashboard_core::DashboardConfig;

pub fn load_config() -> DashboardConfig {
    DashboardConfig::from_lookup(|key| {
        let value = match key {
            ENV_API_URL => option_env!("DASHBOARD_API_URL"),
            ENV_TRACKER_URL => option_env!("DASHBOARD_TRACKER_URL"),
            ENV_POLL_SECS => option_env!("DASHBOARD_POLL_SECS"),
            ENV_REFRESH_DELAY_SECS => option_env!("DASHBOARD_REFRESH_DELAY_SECS"),
            ENV_LOG_LEVEL => option_env!("DASHBOARD_LOG_LEVEL"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

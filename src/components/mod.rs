//! UI Components
//!
//! Leptos components for the login and dashboard screens.

mod loading;
mod login_page;
mod dashboard_page;
mod summary_cards;
mod charts;
mod category_cards;
mod priority_grid;
mod trends_panel;
mod issues_table;

pub use loading::{ErrorPanel, Loading};
pub use login_page::LoginPage;
pub use dashboard_page::DashboardPage;
pub use summary_cards::SummaryCards;
pub use charts::{CategoryPie, CategoryVolume, LineChart, StatusBars};
pub use category_cards::CategoryCards;
pub use priority_grid::PriorityGrid;
pub use trends_panel::TrendsPanel;
pub use issues_table::IssuesTable;

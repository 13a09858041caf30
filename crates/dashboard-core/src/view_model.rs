//! View Models
//!
//! Deterministic mapping from raw API payloads to render-ready structures.
//! Every percentage shown on the dashboard is computed here.

use crate::chart::palette_color;
use crate::models::{DashboardSnapshot, Issue, NamedCount, TrendPoint, TrendsData};

pub const STATUS_DONE: &str = "Done";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_BACKLOG: &str = "Backlog";

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `value / total * 100` rounded, or `0` when `total` is zero.
pub fn percent_of(value: u64, total: u64, decimals: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(value as f64 / total as f64 * 100.0, decimals)
}

// ========================
// Dashboard Summary
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    pub value: u64,
    /// One decimal place
    pub percentage: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriorityShare {
    pub name: String,
    pub value: u64,
    pub percentage: f64,
}

impl PriorityShare {
    /// One decimal place, e.g. `30.0%`
    pub fn share_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusSummary {
    pub completed: u64,
    pub in_progress: u64,
    pub backlog: u64,
    /// Whole percent
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub name: String,
    pub total: u64,
    pub done: u64,
    pub in_progress: u64,
    pub backlog: u64,
    pub other: u64,
    pub completion: f64,
    pub color: &'static str,
}

impl CategoryCard {
    /// Progress bar width, clamped to the bar
    pub fn bar_width(&self) -> f64 {
        self.completion.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub total_issues: u64,
    pub categories: Vec<CategoryShare>,
    pub statuses: Vec<NamedCount>,
    pub priorities: Vec<PriorityShare>,
    pub summary: StatusSummary,
    pub category_cards: Vec<CategoryCard>,
    pub last_updated: Option<String>,
}

impl DashboardView {
    /// Categories by descending volume for the ranked breakdown
    pub fn categories_by_volume(&self) -> Vec<CategoryShare> {
        let mut ranked = self.categories.clone();
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked
    }
}

fn status_count(statuses: &[NamedCount], name: &str) -> u64 {
    statuses
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.value)
        .unwrap_or(0)
}

pub fn summarize_statuses(statuses: &[NamedCount], total_issues: u64) -> StatusSummary {
    let completed = status_count(statuses, STATUS_DONE);
    StatusSummary {
        completed,
        in_progress: status_count(statuses, STATUS_IN_PROGRESS),
        backlog: status_count(statuses, STATUS_BACKLOG),
        completion_rate: percent_of(completed, total_issues, 0),
    }
}

pub fn build_dashboard_view(snapshot: DashboardSnapshot) -> DashboardView {
    let total = snapshot.total_issues;

    let categories = snapshot
        .category_stats
        .into_iter()
        .enumerate()
        .map(|(index, stat)| CategoryShare {
            percentage: percent_of(stat.value, total, 1),
            color: palette_color(index),
            name: stat.name,
            value: stat.value,
        })
        .collect();

    let priorities = snapshot
        .priority_stats
        .into_iter()
        .map(|stat| PriorityShare {
            percentage: percent_of(stat.value, total, 1),
            name: stat.name,
            value: stat.value,
        })
        .collect();

    let category_cards = snapshot
        .category_details
        .into_iter()
        .enumerate()
        .map(|(index, (name, detail))| CategoryCard {
            name,
            total: detail.total,
            done: detail.done,
            in_progress: detail.in_progress,
            backlog: detail.backlog,
            other: detail.other,
            completion: detail.completion,
            color: palette_color(index),
        })
        .collect();

    DashboardView {
        total_issues: total,
        summary: summarize_statuses(&snapshot.status_stats, total),
        statuses: snapshot.status_stats,
        categories,
        priorities,
        category_cards,
        last_updated: snapshot.last_updated,
    }
}

// ========================
// Trends
// ========================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendChange {
    pub percent: f64,
}

impl TrendChange {
    /// Visual class; zero counts as positive
    pub fn class(&self) -> &'static str {
        if self.percent >= 0.0 {
            "positive"
        } else {
            "negative"
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.percent > 0.0 {
            "▲"
        } else {
            "▼"
        }
    }

    /// e.g. `▲ 12.5%`
    pub fn label(&self) -> String {
        format!("{} {}%", self.arrow(), self.percent.abs())
    }

    /// Signed form used in tooltips, e.g. `+12.5%`
    pub fn signed(&self) -> String {
        if self.percent > 0.0 {
            format!("+{}%", self.percent)
        } else {
            format!("{}%", self.percent)
        }
    }
}

/// Hover text for one week of a series, e.g. `2024-W18: 6 (Change: +50%)`
pub fn point_tooltip(point: &TrendPoint) -> String {
    match point.change {
        Some(percent) => format!(
            "{}: {} (Change: {})",
            point.week,
            point.count,
            TrendChange { percent }.signed()
        ),
        None => format!("{}: {}", point.week, point.count),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendCard {
    pub category: String,
    pub latest_count: u64,
    pub change: Option<TrendChange>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub category: String,
    pub color: &'static str,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendsView {
    pub total: Vec<TrendPoint>,
    pub by_category: Vec<TrendSeries>,
    pub cards: Vec<TrendCard>,
}

impl TrendsView {
    pub fn weeks(&self) -> Vec<String> {
        self.total.iter().map(|p| p.week.clone()).collect()
    }

    /// Largest count over the total and every category series
    pub fn max_count(&self) -> u64 {
        self.total
            .iter()
            .chain(self.by_category.iter().flat_map(|s| s.points.iter()))
            .map(|p| p.count)
            .max()
            .unwrap_or(0)
    }
}

pub fn trend_card(category: &str, points: &[TrendPoint]) -> Option<TrendCard> {
    let latest = points.last()?;
    Some(TrendCard {
        category: category.to_string(),
        latest_count: latest.count,
        change: latest.change.map(|percent| TrendChange { percent }),
    })
}

/// `None` when there is no total series to draw.
pub fn build_trends_view(data: TrendsData) -> Option<TrendsView> {
    if data.total.is_empty() {
        return None;
    }

    let mut cards = Vec::new();
    let mut by_category = Vec::with_capacity(data.by_category.len());
    for (index, (category, points)) in data.by_category.into_iter().enumerate() {
        cards.extend(trend_card(&category, &points));
        by_category.push(TrendSeries {
            category,
            color: palette_color(index),
            points,
        });
    }

    Some(TrendsView {
        total: data.total,
        by_category,
        cards,
    })
}

// ========================
// Issue Table
// ========================

/// `status-` plus the lowercased status with whitespace runs as `-`
pub fn status_badge_class(status: &str) -> String {
    let slug = status
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("status-badge status-{}", slug)
}

pub fn priority_badge_class(priority: &str) -> String {
    format!("priority-badge priority-{}", priority.to_lowercase())
}

/// Row identity for the issue table; any rendered field change forces a new row
pub fn issue_row_key(issue: &Issue) -> (String, String, String, String, String) {
    (
        issue.issue_key.clone(),
        issue.summary.clone(),
        issue.status.clone(),
        issue.category.clone(),
        issue.priority.clone(),
    )
}

/// Case-insensitive substring search over the visible columns.
pub fn filter_issues<'a>(issues: &'a [Issue], query: &str) -> Vec<&'a Issue> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return issues.iter().collect();
    }
    issues
        .iter()
        .filter(|issue| {
            [
                &issue.issue_key,
                &issue.summary,
                &issue.status,
                &issue.category,
                &issue.priority,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

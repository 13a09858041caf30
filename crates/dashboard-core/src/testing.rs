//! Test doubles for the backend and timer seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::DashboardApi;
use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::error::ApiResult;
use crate::models::{
    Ack, CategoryDetail, DashboardSnapshot, Envelope, Issue, NamedCount, OrderedMap, TrendPoint,
    TrendsData,
};

/// Clock backed by tokio, so tests can run with paused time
pub struct TokioClock;

#[async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Let spawned local tasks run up to their next await point
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

pub fn test_config() -> DashboardConfig {
    DashboardConfig::default()
}

/// One endpoint's scripted behavior: queued one-shot responses, then a default
pub struct Scripted<T> {
    default: RefCell<ApiResult<T>>,
    queue: RefCell<VecDeque<(Duration, ApiResult<T>)>>,
    calls: Cell<usize>,
}

impl<T: Clone> Scripted<T> {
    fn new(default: ApiResult<T>) -> Self {
        Self {
            default: RefCell::new(default),
            queue: RefCell::new(VecDeque::new()),
            calls: Cell::new(0),
        }
    }

    pub fn set(&self, response: ApiResult<T>) {
        *self.default.borrow_mut() = response;
    }

    /// Queue a response delivered after `delay`
    pub fn push(&self, delay: Duration, response: ApiResult<T>) {
        self.queue.borrow_mut().push_back((delay, response));
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    async fn call(&self) -> ApiResult<T> {
        self.calls.set(self.calls.get() + 1);
        let queued = self.queue.borrow_mut().pop_front();
        match queued {
            Some((delay, response)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => self.default.borrow().clone(),
        }
    }
}

pub struct MockApi {
    pub login: Scripted<Ack>,
    pub dashboard: Scripted<Envelope<DashboardSnapshot>>,
    pub issues: Scripted<Envelope<Vec<Issue>>>,
    pub trends: Scripted<Envelope<TrendsData>>,
    pub refresh: Scripted<Ack>,
    pub passwords: RefCell<Vec<String>>,
}

impl MockApi {
    /// Every endpoint succeeds with sample data
    pub fn healthy() -> Self {
        Self {
            login: Scripted::new(Ok(Ack::accepted())),
            dashboard: Scripted::new(Ok(Envelope::ok(sample_snapshot(10)))),
            issues: Scripted::new(Ok(Envelope::ok(sample_issues()))),
            trends: Scripted::new(Ok(Envelope::ok(sample_trends()))),
            refresh: Scripted::new(Ok(Ack::accepted())),
            passwords: RefCell::new(Vec::new()),
        }
    }

    pub fn fetch_calls(&self) -> (usize, usize, usize) {
        (self.dashboard.calls(), self.issues.calls(), self.trends.calls())
    }
}

#[async_trait(?Send)]
impl DashboardApi for MockApi {
    async fn login(&self, password: &str) -> ApiResult<Ack> {
        self.passwords.borrow_mut().push(password.to_string());
        self.login.call().await
    }

    async fn dashboard(&self) -> ApiResult<Envelope<DashboardSnapshot>> {
        self.dashboard.call().await
    }

    async fn issues(&self) -> ApiResult<Envelope<Vec<Issue>>> {
        self.issues.call().await
    }

    async fn trends(&self) -> ApiResult<Envelope<TrendsData>> {
        self.trends.call().await
    }

    async fn trigger_refresh(&self) -> ApiResult<Ack> {
        self.refresh.call().await
    }
}

pub fn sample_snapshot(total: u64) -> DashboardSnapshot {
    DashboardSnapshot {
        total_issues: total,
        category_stats: vec![NamedCount::new("Rating", 6), NamedCount::new("Billing", 4)],
        status_stats: vec![
            NamedCount::new("Done", 7),
            NamedCount::new("In Progress", 2),
            NamedCount::new("Backlog", 1),
        ],
        priority_stats: vec![NamedCount::new("High", 3), NamedCount::new("Low", 7)],
        category_details: OrderedMap::from_iter(vec![(
            "Rating".to_string(),
            CategoryDetail { total: 6, done: 5, in_progress: 1, completion: 83.3, ..Default::default() },
        )]),
        last_updated: Some("2024-05-01T10:00:00".to_string()),
    }
}

pub fn sample_issues() -> Vec<Issue> {
    vec![
        Issue {
            issue_key: "EPIC-2".to_string(),
            summary: "Premium mismatch on renewal".to_string(),
            status: "In Progress".to_string(),
            category: "Billing".to_string(),
            priority: "High".to_string(),
            ..Default::default()
        },
        Issue {
            issue_key: "EPIC-1".to_string(),
            summary: "Rating engine timeout".to_string(),
            status: "Done".to_string(),
            category: "Rating".to_string(),
            priority: "Low".to_string(),
            ..Default::default()
        },
    ]
}

pub fn sample_trends() -> TrendsData {
    let week = |week: &str, count: u64, change: Option<f64>| TrendPoint {
        week: week.to_string(),
        count,
        change,
    };
    TrendsData {
        total: vec![week("2024-W17", 4, None), week("2024-W18", 6, Some(50.0))],
        by_category: OrderedMap::from_iter(vec![(
            "Rating".to_string(),
            vec![week("2024-W17", 2, None), week("2024-W18", 3, Some(50.0))],
        )]),
    }
}

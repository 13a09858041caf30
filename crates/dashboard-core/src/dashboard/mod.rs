//! Dashboard Controller
//!
//! Owns the dashboard view state: the three-way fetch, the scheduled poll,
//! and the manual refresh that asks the backend to recompute first.
//!
//! Concurrent fetch sequences (poll tick vs. manual refresh) are not
//! serialized, but every sequence takes a generation ticket and only the
//! newest one may write its results. Manual refresh has its own in-flight
//! guard.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{abortable, AbortHandle};
use futures::join;
use log::{debug, error, info, warn};

use crate::api::DashboardApi;
use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::error::{RefreshError, FETCH_FAILED_MESSAGE, REFRESH_FAILED_MESSAGE};
use crate::models::{Envelope, Issue};
use crate::notify::Listener;
use crate::view_model::{build_dashboard_view, build_trends_view, DashboardView, TrendsView};


#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    /// Fetch failed; the view offers a retry
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub phase: Phase,
    pub view: Option<DashboardView>,
    pub issues: Vec<Issue>,
    pub trends: Option<TrendsView>,
    pub refreshing: bool,
    pub refresh_error: Option<String>,
}

impl Default for DashboardState {
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

/// Whether the dashboard view is still on screen.
///
/// Cheap to clone and `Send + Sync`, so UI cleanup hooks can hold it.
#[derive(Debug, Clone)]
pub struct Mount {
    inner: Arc<MountInner>,
}

#[derive(Debug)]
struct MountInner {
    mounted: AtomicBool,
    tasks: Mutex<Vec<AbortHandle>>,
}

impl Mount {
    fn new() -> Self {
        Self {
            inner: Arc::new(MountInner {
                mounted: AtomicBool::new(true),
                tasks: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    fn attach(&self, handle: AbortHandle) {
        if !self.is_mounted() {
            handle.abort();
            return;
        }
        if let Ok(mut tasks) = self.inner.tasks.lock() {
            tasks.push(handle);
        }
    }

    /// Stop background tasks; later results are dropped.
    pub fn unmount(&self) {
        self.inner.mounted.store(false, Ordering::SeqCst);
        if let Ok(mut tasks) = self.inner.tasks.lock() {
            for task in tasks.drain(..) {
                task.abort();
            }
        }
        debug!("[DASHBOARD] unmounted");
    }
}

pub struct DashboardController<A, C> {
    api: A,
    clock: C,
    poll_interval: Duration,
    settle_delay: Duration,
    state: RefCell<DashboardState>,
    listener: Listener<DashboardState>,
    mount: Mount,
    generation: Cell<u64>,
}

impl<A, C> DashboardController<A, C>
where
    A: DashboardApi + 'static,
    C: Clock + 'static,
{
    pub fn new(api: A, clock: C, config: &DashboardConfig) -> Rc<Self> {
        Rc::new(Self {
            api,
            clock,
            poll_interval: config.poll_interval,
            settle_delay: config.refresh_settle_delay,
            state: RefCell::new(DashboardState::default()),
            listener: Listener::default(),
            mount: Mount::new(),
            generation: Cell::new(0),
        })
    }

    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Called with the full state after every change while mounted
    pub fn subscribe(&self, callback: impl Fn(&DashboardState) + 'static) {
        self.listener.set(callback);
    }

    pub fn mount(&self) -> Mount {
        self.mount.clone()
    }

    pub fn unmount(&self) {
        self.mount.unmount();
    }

    fn update(&self, change: impl FnOnce(&mut DashboardState)) {
        if !self.mount.is_mounted() {
            return;
        }
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            state.clone()
        };
        self.listener.notify(&snapshot);
    }

    /// Initial load and retry: show the loading state, then fetch.
    pub async fn load(&self) {
        self.update(|state| state.phase = Phase::Loading);
        self.fetch_all().await;
    }

    /// Fetch dashboard, issues and trends concurrently and apply them together.
    ///
    /// A transport failure on any of the three updates nothing and moves to
    /// the error phase. A dataset answered with `success: false` keeps its
    /// previous value.
    pub async fn fetch_all(&self) {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);

        let (dashboard, issues, trends) =
            join!(self.api.dashboard(), self.api.issues(), self.api.trends());

        if !self.mount.is_mounted() {
            debug!("[DASHBOARD] fetch #{} finished after unmount, discarded", ticket);
            return;
        }
        if ticket != self.generation.get() {
            debug!("[DASHBOARD] fetch #{} superseded by #{}", ticket, self.generation.get());
            return;
        }

        let joined = dashboard.and_then(|d| issues.and_then(|i| trends.map(|t| (d, i, t))));
        match joined {
            Ok((dashboard, issues, trends)) => {
                let view = accept("dashboard", dashboard).map(build_dashboard_view);
                let issues = accept("issues", issues);
                let trends = accept("trends", trends).map(build_trends_view);
                self.update(|state| {
                    if let Some(view) = view {
                        state.view = Some(view);
                    }
                    if let Some(issues) = issues {
                        state.issues = issues;
                    }
                    if let Some(trends) = trends {
                        state.trends = trends;
                    }
                    state.phase = Phase::Ready;
                });
            }
            Err(e) => {
                error!("[DASHBOARD] fetch failed: {}", e);
                self.update(|state| state.phase = Phase::Error(FETCH_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Scheduled refresh loop; runs until [`Mount::unmount`].
    ///
    /// Ticks fetch silently, without passing through the loading phase.
    pub fn poll(self: &Rc<Self>) -> impl Future<Output = ()> + 'static {
        let this = Rc::clone(self);
        let (task, handle) = abortable(async move {
            loop {
                this.clock.sleep(this.poll_interval).await;
                if !this.mount.is_mounted() {
                    break;
                }
                debug!("[DASHBOARD] scheduled refresh");
                this.fetch_all().await;
            }
        });
        self.mount.attach(handle);
        async move {
            let _ = task.await;
        }
    }

    /// Ask the backend to recompute, wait for it to settle, then re-fetch.
    pub async fn refresh(&self) -> Result<(), RefreshError> {
        if self.state.borrow().refreshing {
            return Err(RefreshError::InFlight);
        }
        self.update(|state| {
            state.refreshing = true;
            state.refresh_error = None;
        });

        let triggered = match self.api.trigger_refresh().await {
            Ok(ack) if ack.success => Ok(ack),
            Ok(ack) => Err(RefreshError::Declined(
                ack.error.or(ack.message).unwrap_or_else(|| "no reason given".to_string()),
            )),
            Err(e) => Err(RefreshError::Trigger(e)),
        };
        match triggered {
            Ok(ack) => info!(
                "[DASHBOARD] refresh started: {}",
                ack.message.as_deref().unwrap_or("accepted")
            ),
            Err(e) => {
                error!("[DASHBOARD] refresh trigger failed: {}", e);
                self.update(|state| {
                    state.refreshing = false;
                    state.refresh_error = Some(REFRESH_FAILED_MESSAGE.to_string());
                });
                return Err(e);
            }
        }

        self.clock.sleep(self.settle_delay).await;
        if !self.mount.is_mounted() {
            return Ok(());
        }
        // The control comes back once the delay is over, not when the fetch lands
        self.update(|state| state.refreshing = false);
        self.fetch_all().await;
        Ok(())
    }

    pub fn dismiss_refresh_error(&self) {
        self.update(|state| state.refresh_error = None);
    }
}

fn accept<T>(dataset: &str, envelope: Envelope<T>) -> Option<T> {
    if !envelope.success {
        warn!(
            "[DASHBOARD] {} unavailable: {}",
            dataset,
            envelope.error.as_deref().unwrap_or("success=false")
        );
    }
    envelope.into_data()
}

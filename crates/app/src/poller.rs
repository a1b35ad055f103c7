//! Poller — fetches every pv feed on its own interval and patches the panel.
//!
//! Each [`PollTarget`] gets one task. A task awaits each fetch before
//! waiting for the next tick, so requests of one target never overlap;
//! ticks missed during a slow fetch are skipped rather than bunched up.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use homewatch_domain::dashboard::{ApplyOutcome, Feed};
use homewatch_domain::error::HomewatchError;

use crate::ports::FeedClient;
use crate::services::panel_service::PanelService;

/// Fast feeds change every second on the controller.
pub const FAST_INTERVAL: Duration = Duration::from_secs(2);
/// Slow feeds are daily aggregates and sensor readings.
pub const SLOW_INTERVAL: Duration = Duration::from_secs(30);

/// One feed to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTarget {
    pub feed: Feed,
    /// Path relative to the feed base URL.
    pub path: String,
    pub interval: Duration,
}

impl PollTarget {
    #[must_use]
    pub fn new(feed: Feed, path: impl Into<String>, interval: Duration) -> Self {
        Self {
            feed,
            path: path.into(),
            interval,
        }
    }

    /// Default path of `feed`: `/pv/data/<feed>.json`.
    #[must_use]
    pub fn default_path(feed: Feed) -> String {
        format!("/pv/data/{feed}.json")
    }

    /// Default interval of `feed`.
    #[must_use]
    pub fn default_interval(feed: Feed) -> Duration {
        match feed {
            Feed::Pstate | Feed::Dstate | Feed::Devices => FAST_INTERVAL,
            Feed::Gstate | Feed::Sensors => SLOW_INTERVAL,
        }
    }

    /// One target per feed with default path and interval.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        Feed::ALL
            .into_iter()
            .map(|feed| Self::new(feed, Self::default_path(feed), Self::default_interval(feed)))
            .collect()
    }
}

/// Fetch `target` once and apply the body to `panel`.
///
/// # Errors
///
/// Returns the fetch error; the panel is left untouched.
pub async fn poll_once<C: FeedClient>(
    target: &PollTarget,
    client: &C,
    panel: &PanelService,
) -> Result<ApplyOutcome, HomewatchError> {
    let body = client.fetch(&target.path).await?;
    Ok(panel.apply_feed(target.feed, &body).await)
}

/// Handle to the running poll tasks.
pub struct Poller {
    handles: Vec<JoinHandle<()>>,
}

impl Poller {
    /// Spawn one task per target. Each polls immediately, then on its interval.
    /// Targets with a zero interval are skipped.
    pub fn spawn<C>(targets: Vec<PollTarget>, client: Arc<C>, panel: Arc<PanelService>) -> Self
    where
        C: FeedClient + 'static,
    {
        let handles = targets
            .into_iter()
            .filter(|target| {
                if target.interval.is_zero() {
                    tracing::warn!(feed = %target.feed, "zero poll interval, feed disabled");
                    return false;
                }
                true
            })
            .map(|target| {
                tracing::info!(
                    feed = %target.feed,
                    path = %target.path,
                    interval_secs = target.interval.as_secs_f64(),
                    "feed poller started"
                );
                tokio::spawn(run(target, Arc::clone(&client), Arc::clone(&panel)))
            })
            .collect();
        Self { handles }
    }

    /// Number of running poll tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Abort every poll task.
    pub fn shutdown(self) {
        for handle in self.handles {
            handle.abort();
        }
        tracing::debug!("feed pollers aborted");
    }
}

async fn run<C: FeedClient>(target: PollTarget, client: Arc<C>, panel: Arc<PanelService>) {
    let mut ticker = tokio::time::interval(target.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        if let Err(err) = poll_once(&target, client.as_ref(), &panel).await {
            tracing::warn!(feed = %target.feed, error = ?err, "feed poll failed, retrying next interval");
        }
    }
}

//! Panel service — owner of the live pv dashboard state.

use serde_json::Value;
use tokio::sync::RwLock;

use homewatch_domain::dashboard::{ApplyOutcome, Feed, Panel, RuleTable};
use homewatch_domain::time::now;

/// Holds the [`Panel`]; the poller writes, HTTP handlers read snapshots.
pub struct PanelService {
    panel: RwLock<Panel>,
}

impl PanelService {
    /// Start with an empty panel laid out from `rules`.
    #[must_use]
    pub fn new(rules: &RuleTable) -> Self {
        Self {
            panel: RwLock::new(Panel::new(rules)),
        }
    }

    /// Copy of the current panel.
    pub async fn snapshot(&self) -> Panel {
        self.panel.read().await.clone()
    }

    /// Apply one fetched feed body.
    #[tracing::instrument(skip(self, body))]
    pub async fn apply_feed(&self, feed: Feed, body: &Value) -> ApplyOutcome {
        let outcome = self.panel.write().await.apply(feed, body, now());
        match outcome {
            ApplyOutcome::Applied(count) => tracing::trace!(count, "feed applied"),
            ApplyOutcome::WrongShape => tracing::debug!("feed body has unexpected shape"),
        }
        outcome
    }
}

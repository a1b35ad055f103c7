//! Sensor service — summary and charts of the radio bridge log.

use std::path::PathBuf;

use homewatch_domain::chart::{ModelCharts, build_charts};
use homewatch_domain::error::HomewatchError;
use homewatch_domain::sensor_log::{SensorLogAggregator, SensorLogFilter, SensorSummary};

use crate::ports::FileSystem;

/// Reads the sensor log on every call; nothing is cached.
pub struct SensorService<F> {
    fs: F,
    log_path: PathBuf,
    filter: SensorLogFilter,
}

impl<F: FileSystem> SensorService<F> {
    /// Create a service reading `log_path` through `fs`.
    pub fn new(fs: F, log_path: impl Into<PathBuf>, filter: SensorLogFilter) -> Self {
        Self {
            fs,
            log_path: log_path.into(),
            filter,
        }
    }

    /// Aggregate the whole log. A missing or unreadable log yields an empty
    /// summary.
    #[tracing::instrument(skip(self), fields(path = %self.log_path.display()))]
    pub async fn summary(&self) -> SensorSummary {
        let content = match self.fs.read_bytes(&self.log_path).await {
            Ok(content) => content,
            Err(HomewatchError::NotFound(err)) => {
                tracing::debug!(%err, "sensor log missing");
                return SensorSummary::default();
            }
            Err(err) => {
                tracing::warn!(error = ?err, "unable to read sensor log");
                return SensorSummary::default();
            }
        };

        let mut aggregator = SensorLogAggregator::new(self.filter.clone());
        for line in content.split(|byte| *byte == b'\n') {
            aggregator.push_raw_line(line);
        }
        if aggregator.malformed() > 0 {
            tracing::debug!(
                malformed = aggregator.malformed(),
                "skipped malformed sensor log lines"
            );
        }
        aggregator.finish()
    }

    /// Temperature and pressure charts per model.
    pub async fn charts(&self) -> Vec<ModelCharts> {
        build_charts(&self.summary().await)
    }
}

//! Weather service — the current outdoor readings.

use std::path::{Path, PathBuf};

use homewatch_domain::weather::{WeatherSnapshot, WeatherSources};

use crate::ports::FileSystem;

/// Locations of the single-value files making up a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherPaths {
    pub mtime: PathBuf,
    pub temperature: PathBuf,
    pub humidity: PathBuf,
    pub luminosity: PathBuf,
    pub barometric: PathBuf,
}

pub struct WeatherService<F> {
    fs: F,
    paths: WeatherPaths,
}

impl<F: FileSystem> WeatherService<F> {
    pub fn new(fs: F, paths: WeatherPaths) -> Self {
        Self { fs, paths }
    }

    /// Read every source file and format the snapshot. Unreadable files
    /// become empty fields.
    #[tracing::instrument(skip(self))]
    pub async fn snapshot(&self) -> WeatherSnapshot {
        let (mtime, temperature, humidity, luminosity, barometric) = tokio::join!(
            self.read(&self.paths.mtime),
            self.read(&self.paths.temperature),
            self.read(&self.paths.humidity),
            self.read(&self.paths.luminosity),
            self.read(&self.paths.barometric),
        );
        WeatherSnapshot::from_sources(&WeatherSources {
            mtime,
            temperature,
            humidity,
            luminosity,
            barometric,
        })
    }

    async fn read(&self, path: &Path) -> Option<String> {
        match self.fs.read_to_string(path).await {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = ?err, "weather source unreadable");
                None
            }
        }
    }
}

//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homewatch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use homewatch_app::poller::PollTarget;
use homewatch_app::services::weather_service::WeatherPaths;
use homewatch_domain::dashboard::{Feed, FieldRule, RuleTable, Scale, UpdateMode};
use homewatch_domain::sensor_log::{DEFAULT_EXCLUDED_MODELS, SensorLogFilter};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Where the producers write their files.
    pub paths: PathsConfig,
    /// Sensor log filtering.
    pub sensors: SensorsConfig,
    /// Dashboard page settings.
    pub pages: PagesConfig,
    /// PV feeds and relay gateway.
    pub pv: PvConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// File locations.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Line-delimited JSON log of the radio bridge.
    pub sensor_log: PathBuf,
    /// Directory of the webcam pictures.
    pub images: PathBuf,
    /// Directory of the archived videos.
    pub videos: PathBuf,
    /// Serve the video files themselves under `/webcam/videos/`.
    pub serve_videos: bool,
    /// Single-value weather files.
    pub weather: WeatherConfig,
}

/// Single-value files of the weather snapshot.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub mtime: PathBuf,
    pub temperature: PathBuf,
    pub humidity: PathBuf,
    pub luminosity: PathBuf,
    pub barometric: PathBuf,
}

/// Sensor log settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    /// Models never shown.
    pub excluded_models: Vec<String>,
}

/// Dashboard page settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub webcam_refresh_seconds: u32,
    pub pv_refresh_seconds: u32,
    pub sensors_refresh_seconds: u32,
    /// Picture shown on the webcam page, relative to `paths.images`.
    pub webcam_image: String,
    /// Quality of re-encoded pictures (1-100).
    pub jpeg_quality: u8,
}

/// PV feed and relay settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PvConfig {
    /// Base URL the feed paths are relative to.
    pub base_url: String,
    /// Base URL of the relay gateway, `base_url` when unset.
    pub relay_base_url: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Feeds to poll.
    pub targets: Vec<PollTargetConfig>,
    /// Overrides of the built-in display rules.
    pub rules: Vec<RuleOverride>,
}

/// One polled feed. Unset fields take the feed's default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PollTargetConfig {
    pub feed: Feed,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub interval_ms: Option<u64>,
}

/// Replace or hide the display rule of one key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleOverride {
    pub feed: Feed,
    pub key: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub mode: Option<UpdateMode>,
    #[serde(default)]
    pub scale: Scale,
}

impl Config {
    /// Load configuration from `homewatch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homewatch.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HOMEWATCH_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("HOMEWATCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("HOMEWATCH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("HOMEWATCH_PV_BASE_URL") {
            self.pv.base_url = val;
        }
        if let Some(val) = var("HOMEWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.pv.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "pv.timeout_ms must be non-zero".to_string(),
            ));
        }
        check_url("pv.base_url", &self.pv.base_url)?;
        if let Some(url) = &self.pv.relay_base_url {
            check_url("pv.relay_base_url", url)?;
        }
        if let Some(target) = self.pv.targets.iter().find(|t| t.interval_ms == Some(0)) {
            return Err(ConfigError::Validation(format!(
                "poll interval of {} must be non-zero",
                target.feed
            )));
        }
        if let Some(rule) = self.pv.rules.iter().find(|r| !r.hidden && r.mode.is_none()) {
            return Err(ConfigError::Validation(format!(
                "rule {}.{} needs a mode or hidden = true",
                rule.feed, rule.key
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn check_url(name: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{name} must be an absolute http(s) URL, got {url:?}"
        )))
    }
}

impl PathsConfig {
    /// Directory to serve under `/webcam/videos/`, if enabled.
    #[must_use]
    pub fn served_videos(&self) -> Option<PathBuf> {
        self.serve_videos.then(|| self.videos.clone())
    }
}

impl From<&WeatherConfig> for WeatherPaths {
    fn from(config: &WeatherConfig) -> Self {
        Self {
            mtime: config.mtime.clone(),
            temperature: config.temperature.clone(),
            humidity: config.humidity.clone(),
            luminosity: config.luminosity.clone(),
            barometric: config.barometric.clone(),
        }
    }
}

impl SensorsConfig {
    #[must_use]
    pub fn filter(&self) -> SensorLogFilter {
        SensorLogFilter::new(self.excluded_models.iter().cloned())
    }
}

impl PvConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn relay_base_url(&self) -> &str {
        self.relay_base_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Poll targets with defaults filled in.
    #[must_use]
    pub fn poll_targets(&self) -> Vec<PollTarget> {
        self.targets
            .iter()
            .map(|target| {
                PollTarget::new(
                    target.feed,
                    target
                        .path
                        .clone()
                        .unwrap_or_else(|| PollTarget::default_path(target.feed)),
                    target.interval_ms.map_or_else(
                        || PollTarget::default_interval(target.feed),
                        Duration::from_millis,
                    ),
                )
            })
            .collect()
    }

    /// Built-in rules with the configured overrides applied.
    #[must_use]
    pub fn rule_table(&self) -> RuleTable {
        let mut table = RuleTable::default();
        for rule in &self.rules {
            if rule.hidden {
                table.remove(rule.feed, &rule.key);
            } else if let Some(mode) = rule.mode {
                table.insert(rule.feed, rule.key.clone(), FieldRule::new(mode, rule.scale));
            }
        }
        table
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homewatchd=info,homewatch=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sensor_log: PathBuf::from("/ram/mqtt/433/433.json"),
            images: PathBuf::from("/ram/webcam"),
            videos: PathBuf::from("/home/www/webcam/videos"),
            serve_videos: true,
            weather: WeatherConfig::default(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            mtime: PathBuf::from("/ram/webcam/.mtime"),
            temperature: PathBuf::from("/ram/mqtt/433/Nexus-TH/60/temperature_C"),
            humidity: PathBuf::from("/ram/mqtt/433/Nexus-TH/60/humidity"),
            luminosity: PathBuf::from("/ram/mqtt/sensor/BH1750/lum_percent"),
            barometric: PathBuf::from("/ram/mqtt/sensor/BMP085/baro"),
        }
    }
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            excluded_models: DEFAULT_EXCLUDED_MODELS.map(String::from).to_vec(),
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            webcam_refresh_seconds: 10,
            pv_refresh_seconds: 2,
            sensors_refresh_seconds: 300,
            webcam_image: "webcam.jpg".to_string(),
            jpeg_quality: 100,
        }
    }
}

impl Default for PvConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            relay_base_url: None,
            timeout_ms: 5000,
            targets: Feed::ALL
                .into_iter()
                .map(|feed| PollTargetConfig {
                    feed,
                    path: None,
                    interval_ms: None,
                })
                .collect(),
            rules: Vec::new(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

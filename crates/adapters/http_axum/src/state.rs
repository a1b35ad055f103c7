//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};
use homewatch_app::services::image_service::ImageService;
use homewatch_app::services::panel_service::PanelService;
use homewatch_app::services::relay_service::RelayService;
use homewatch_app::services::sensor_service::SensorService;
use homewatch_app::services::video_service::VideoService;
use homewatch_app::services::weather_service::WeatherService;

/// Page settings of the server-rendered dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Meta refresh of the webcam page.
    pub webcam_refresh_seconds: u32,
    /// Meta refresh of the pv dashboard.
    pub pv_refresh_seconds: u32,
    /// Meta refresh of the sensor charts.
    pub sensors_refresh_seconds: u32,
    /// Image shown as the live webcam picture.
    pub webcam_image: String,
    /// Directory the archived videos are served from, if any.
    pub video_dir: Option<PathBuf>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            webcam_refresh_seconds: 10,
            pv_refresh_seconds: 2,
            sensors_refresh_seconds: 300,
            webcam_image: "webcam.jpg".to_string(),
            video_dir: None,
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the file system, image renderer and relay switch to avoid
/// dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<F, R, S> {
    pub sensor_service: Arc<SensorService<F>>,
    pub weather_service: Arc<WeatherService<F>>,
    pub video_service: Arc<VideoService<F>>,
    pub image_service: Arc<ImageService<F, R>>,
    /// Live pv panel, shared with the poller.
    pub panel_service: Arc<PanelService>,
    pub relay_service: Arc<RelayService<S>>,
    pub pages: Arc<PageSettings>,
}

impl<F, R, S> Clone for AppState<F, R, S> {
    fn clone(&self) -> Self {
        Self {
            sensor_service: Arc::clone(&self.sensor_service),
            weather_service: Arc::clone(&self.weather_service),
            video_service: Arc::clone(&self.video_service),
            image_service: Arc::clone(&self.image_service),
            panel_service: Arc::clone(&self.panel_service),
            relay_service: Arc::clone(&self.relay_service),
            pages: Arc::clone(&self.pages),
        }
    }
}

impl<F, R, S> AppState<F, R, S>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    /// Create a new application state from service instances.
    ///
    /// The panel service is taken as an `Arc` because the poller writes to it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sensor_service: SensorService<F>,
        weather_service: WeatherService<F>,
        video_service: VideoService<F>,
        image_service: ImageService<F, R>,
        panel_service: Arc<PanelService>,
        relay_service: RelayService<S>,
        pages: PageSettings,
    ) -> Self {
        Self {
            sensor_service: Arc::new(sensor_service),
            weather_service: Arc::new(weather_service),
            video_service: Arc::new(video_service),
            image_service: Arc::new(image_service),
            panel_service,
            relay_service: Arc::new(relay_service),
            pages: Arc::new(pages),
        }
    }
}

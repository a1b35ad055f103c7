//! Stub ports and a ready-made state for the router tests.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use homewatch_app::ports::{DirEntry, FileSystem, ImageRenderer, RelaySwitch};
use homewatch_app::services::image_service::ImageService;
use homewatch_app::services::panel_service::PanelService;
use homewatch_app::services::relay_service::RelayService;
use homewatch_app::services::sensor_service::SensorService;
use homewatch_app::services::video_service::VideoService;
use homewatch_app::services::weather_service::{WeatherPaths, WeatherService};
use homewatch_domain::dashboard::RuleTable;
use homewatch_domain::error::{HomewatchError, NotFoundError};
use homewatch_domain::image::ImageSize;
use homewatch_domain::relay::RelayCommand;
use homewatch_domain::sensor_log::SensorLogFilter;
use homewatch_domain::time::now;

use crate::state::{AppState, PageSettings};

pub const LOG: &str = "/ram/433.json";
pub const IMAGES: &str = "/ram/webcam";
pub const VIDEOS: &str = "/www/videos";

#[derive(Clone, Default)]
pub struct StubFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl StubFs {
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    fn lookup(&self, path: &Path) -> Result<Vec<u8>, HomewatchError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            NotFoundError {
                kind: "File",
                name: path.display().to_string(),
            }
            .into()
        })
    }
}

impl FileSystem for StubFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, HomewatchError>> + Send {
        let result = self
            .lookup(path)
            .and_then(|bytes| String::from_utf8(bytes).map_err(HomewatchError::io));
        async { result }
    }

    fn read_bytes(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send {
        let result = self.lookup(path);
        async { result }
    }

    fn list_files(
        &self,
        dir: &Path,
    ) -> impl Future<Output = Result<Vec<DirEntry>, HomewatchError>> + Send {
        let entries: Vec<DirEntry> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| {
                Some(DirEntry {
                    name: path.file_name()?.to_string_lossy().into_owned(),
                    modified: now(),
                })
            })
            .collect();
        async { Ok(entries) }
    }
}

/// Renderer that appends `F` or `H` so tests can see the requested size.
pub struct MarkingRenderer;

impl ImageRenderer for MarkingRenderer {
    fn render(
        &self,
        mut jpeg: Vec<u8>,
        size: ImageSize,
    ) -> impl Future<Output = Result<Vec<u8>, HomewatchError>> + Send {
        jpeg.push(match size {
            ImageSize::Full => b'F',
            ImageSize::Half => b'H',
        });
        async { Ok(jpeg) }
    }
}

/// Switch answering every command with a fixed status, recording the paths.
#[derive(Clone)]
pub struct RecordingSwitch {
    pub status: u16,
    pub sent: Arc<Mutex<Vec<String>>>,
}

impl Default for RecordingSwitch {
    fn default() -> Self {
        Self {
            status: 200,
            sent: Arc::default(),
        }
    }
}

impl RelaySwitch for RecordingSwitch {
    fn send(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<u16, HomewatchError>> + Send {
        self.sent.lock().unwrap().push(command.path());
        let status = self.status;
        async move { Ok(status) }
    }
}

pub fn weather_paths() -> WeatherPaths {
    WeatherPaths {
        mtime: "/ram/webcam/.mtime".into(),
        temperature: "/ram/temperature_C".into(),
        humidity: "/ram/humidity".into(),
        luminosity: "/ram/lum_percent".into(),
        barometric: "/ram/baro".into(),
    }
}

pub fn state_with(
    fs: StubFs,
    switch: RecordingSwitch,
    pages: PageSettings,
) -> AppState<StubFs, MarkingRenderer, RecordingSwitch> {
    AppState::new(
        SensorService::new(fs.clone(), LOG, SensorLogFilter::default()),
        WeatherService::new(fs.clone(), weather_paths()),
        VideoService::new(fs.clone(), VIDEOS),
        ImageService::new(fs, MarkingRenderer, IMAGES),
        Arc::new(PanelService::new(&RuleTable::default())),
        RelayService::new(switch),
        pages,
    )
}

pub fn state(fs: StubFs) -> AppState<StubFs, MarkingRenderer, RecordingSwitch> {
    state_with(fs, RecordingSwitch::default(), PageSettings::default())
}

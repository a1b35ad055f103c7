//! Webcam page: live picture, outdoor readings and the video archive.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};
use homewatch_domain::weather::WeatherSnapshot;

use crate::state::AppState;

/// One archived video as linked from the page.
pub struct VideoLink {
    pub name: String,
    /// `None` when no video directory is served.
    pub href: Option<String>,
}

/// Webcam page template.
#[derive(Template)]
#[template(path = "webcam.html")]
pub struct WebcamTemplate {
    refresh_seconds: u32,
    image_src: String,
    low: bool,
    weather: WeatherSnapshot,
    videos: Vec<VideoLink>,
}

impl IntoResponse for WebcamTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` and `GET /webcam/h/` — full size picture.
pub async fn high<F, R, S>(State(state): State<AppState<F, R, S>>) -> WebcamTemplate
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    render(&state, false).await
}

/// `GET /webcam/l/` — the picture is requested from this page, so the
/// image endpoint sees its referer and serves half size.
pub async fn low<F, R, S>(State(state): State<AppState<F, R, S>>) -> WebcamTemplate
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    render(&state, true).await
}

async fn render<F, R, S>(state: &AppState<F, R, S>, low: bool) -> WebcamTemplate
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let weather = state.weather_service.snapshot().await;
    let videos = state.video_service.list().await;
    let served = state.pages.video_dir.is_some();

    WebcamTemplate {
        refresh_seconds: state.pages.webcam_refresh_seconds,
        image_src: format!("/webcam/image?url={}", state.pages.webcam_image),
        low,
        weather,
        videos: videos
            .into_iter()
            .map(|entry| VideoLink {
                href: served.then(|| format!("/webcam/videos/{}", entry.file)),
                name: entry.name,
            })
            .collect(),
    }
}

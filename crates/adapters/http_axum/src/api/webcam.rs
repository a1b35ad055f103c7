//! JSON snapshot handlers of the webcam page and the image endpoint.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};
use homewatch_domain::chart::ModelCharts;
use homewatch_domain::image::ImageSize;
use homewatch_domain::sensor_log::SensorSummary;
use homewatch_domain::video::VideoEntry;
use homewatch_domain::weather::WeatherSnapshot;

use crate::state::AppState;

/// `GET /webcam/sensors.json`
pub async fn sensors<F, R, S>(State(state): State<AppState<F, R, S>>) -> Json<SensorSummary>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Json(state.sensor_service.summary().await)
}

/// `GET /webcam/sensors/charts.json`
pub async fn charts<F, R, S>(State(state): State<AppState<F, R, S>>) -> Json<Vec<ModelCharts>>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Json(state.sensor_service.charts().await)
}

/// `GET /webcam/weather.json`
pub async fn weather<F, R, S>(State(state): State<AppState<F, R, S>>) -> Json<WeatherSnapshot>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Json(state.weather_service.snapshot().await)
}

/// `GET /webcam/videos.json`
pub async fn videos<F, R, S>(State(state): State<AppState<F, R, S>>) -> Json<Vec<VideoEntry>>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Json(state.video_service.list().await)
}

/// Query of the image endpoint. A repeated `url` keeps the last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImageQuery {
    pub url: String,
}

impl ImageQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .rfind(|(key, _)| key == "url")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { url }
    }
}

/// Possible responses from the image endpoint.
pub enum ImageResponse {
    Jpeg(Vec<u8>),
    /// Nothing to serve; an empty `200` tells the client nothing.
    Empty,
}

impl IntoResponse for ImageResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Jpeg(bytes) => ([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response(),
            Self::Empty => ().into_response(),
        }
    }
}

/// `GET /webcam/image?url=<file>` — full size, or half size when the
/// referring page is the low-resolution one.
pub async fn image<F, R, S>(
    State(state): State<AppState<F, R, S>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    headers: HeaderMap,
) -> ImageResponse
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok());
    let size = ImageSize::from_referer(referer);
    let query = match query {
        Ok(Query(pairs)) => ImageQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable image query");
            return ImageResponse::Empty;
        }
    };
    match state.image_service.render(&query.url, size).await {
        Some(bytes) => ImageResponse::Jpeg(bytes),
        None => ImageResponse::Empty,
    }
}

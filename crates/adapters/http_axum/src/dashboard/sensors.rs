//! Sensor charts page: temperature and pressure per model as inline SVG.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};
use homewatch_domain::chart::LineChart;

use crate::state::AppState;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

/// One polyline of a chart.
pub struct Line {
    pub label: String,
    pub color: String,
    pub points: String,
}

/// One chart, ready to draw.
pub struct Chart {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub y_min: String,
    pub y_max: String,
    pub first_label: String,
    pub last_label: String,
    pub lines: Vec<Line>,
}

impl From<&LineChart> for Chart {
    fn from(chart: &LineChart) -> Self {
        let (y_min, y_max) = chart.y_range();
        Self {
            title: chart.title.clone(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            y_min: format!("{y_min:.1}"),
            y_max: format!("{y_max:.1}"),
            first_label: chart.labels.first().cloned().unwrap_or_default(),
            last_label: chart.labels.last().cloned().unwrap_or_default(),
            lines: chart
                .datasets
                .iter()
                .map(|dataset| Line {
                    label: dataset.label.clone(),
                    color: dataset.color.clone(),
                    points: chart.polyline(dataset, CHART_WIDTH, CHART_HEIGHT),
                })
                .collect(),
        }
    }
}

/// Sensor charts page template.
#[derive(Template)]
#[template(path = "sensors.html")]
pub struct SensorsTemplate {
    refresh_seconds: u32,
    charts: Vec<Chart>,
}

impl IntoResponse for SensorsTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /sensors` — two charts per sensor model.
pub async fn page<F, R, S>(State(state): State<AppState<F, R, S>>) -> SensorsTemplate
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let charts = state
        .sensor_service
        .charts()
        .await
        .iter()
        .flat_map(|model| [Chart::from(&model.temperature), Chart::from(&model.pressure)])
        .collect();

    SensorsTemplate {
        refresh_seconds: state.pages.sensors_refresh_seconds,
        charts,
    }
}

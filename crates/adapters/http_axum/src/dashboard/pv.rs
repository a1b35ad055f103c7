//! PV dashboard: value tiles per feed and switchable device bars.

use askama::Template;
use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};
use homewatch_domain::dashboard::{DeviceBar, Element, Feed, Panel};
use homewatch_domain::relay::RelayCommand;
use homewatch_domain::time::format_time;

use crate::api::pv::ToggleRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// One rendered value.
pub struct Tile {
    pub key: String,
    pub text: String,
    pub class: String,
    pub style: String,
}

impl Tile {
    fn from_element(key: &str, element: &Element) -> Self {
        Self {
            key: key.to_string(),
            text: element.text.clone(),
            class: element.class_attr(),
            style: element
                .background
                .map(|band| format!("background-color: {}", band.css()))
                .unwrap_or_default(),
        }
    }
}

/// Tiles of one feed.
pub struct Section {
    pub name: &'static str,
    /// Empty until the feed was received once.
    pub updated: String,
    pub tiles: Vec<Tile>,
}

/// One load bar with its toggle form.
pub struct Bar {
    pub name: String,
    pub class: &'static str,
    pub height: String,
    pub load: i64,
    pub host: String,
    pub id: String,
    pub relay: u32,
    pub switchable: bool,
}

impl From<&DeviceBar> for Bar {
    fn from(bar: &DeviceBar) -> Self {
        Self {
            name: bar.name.clone(),
            class: bar.class.css(),
            height: format!("{:.1}", bar.height),
            load: bar.load,
            host: bar.host.clone(),
            id: bar.id.clone(),
            relay: bar.relay,
            switchable: bar.switchable,
        }
    }
}

/// PV dashboard template.
#[derive(Template)]
#[template(path = "pv.html")]
pub struct PvTemplate {
    refresh_seconds: u32,
    sections: Vec<Section>,
    bars: Vec<Bar>,
}

impl IntoResponse for PvTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

fn sections(panel: &Panel) -> Vec<Section> {
    Feed::ALL
        .into_iter()
        .filter(|feed| *feed != Feed::Devices)
        .map(|feed| Section {
            name: feed.as_str(),
            updated: panel.updated(feed).map(format_time).unwrap_or_default(),
            tiles: panel
                .section(feed)
                .map(|(key, element)| Tile::from_element(key, element))
                .collect(),
        })
        .collect()
}

/// `GET /pv` — render the current panel.
pub async fn page<F, R, S>(State(state): State<AppState<F, R, S>>) -> PvTemplate
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let panel = state.panel_service.snapshot().await;

    PvTemplate {
        refresh_seconds: state.pages.pv_refresh_seconds,
        sections: sections(&panel),
        bars: panel.devices().iter().map(Bar::from).collect(),
    }
}

/// `POST /pv/devices/toggle` — toggle a relay and go back to the dashboard.
///
/// The outcome is logged by the relay service; the page shows the new state
/// once the devices feed reports it.
pub async fn toggle<F, R, S>(
    State(state): State<AppState<F, R, S>>,
    Form(form): Form<ToggleRequest>,
) -> Result<Redirect, ApiError>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let command = RelayCommand::try_from(form)?;
    state.relay_service.toggle(&command).await;
    Ok(Redirect::to("/pv"))
}

//! JSON handlers of the pv dashboard.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};
use homewatch_domain::dashboard::Panel;
use homewatch_domain::relay::{RelayCommand, RelayOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /pv/panel.json`
pub async fn panel<F, R, S>(State(state): State<AppState<F, R, S>>) -> Json<Panel>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Json(state.panel_service.snapshot().await)
}

/// Request body of a relay toggle, shaped like a devices feed entry.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub host: String,
    pub id: String,
    #[serde(default)]
    pub r: u32,
}

impl TryFrom<ToggleRequest> for RelayCommand {
    type Error = ApiError;

    fn try_from(req: ToggleRequest) -> Result<Self, Self::Error> {
        Ok(RelayCommand::new(req.host, req.id, req.r)?)
    }
}

/// `POST /api/relay/toggle`
pub async fn toggle<F, R, S>(
    State(state): State<AppState<F, R, S>>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<RelayOutcome>, ApiError>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let command = RelayCommand::try_from(req)?;
    Ok(Json(state.relay_service.toggle(&command).await))
}

//! JSON handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pv;
pub mod webcam;

use axum::Router;
use axum::routing::{get, post};

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};

use crate::state::AppState;

/// Build the snapshot and command routes.
pub fn routes<F, R, S>() -> Router<AppState<F, R, S>>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Router::new()
        // Webcam
        .route("/webcam/sensors.json", get(webcam::sensors::<F, R, S>))
        .route("/webcam/sensors/charts.json", get(webcam::charts::<F, R, S>))
        .route("/webcam/weather.json", get(webcam::weather::<F, R, S>))
        .route("/webcam/videos.json", get(webcam::videos::<F, R, S>))
        .route("/webcam/image", get(webcam::image::<F, R, S>))
        // PV
        .route("/pv/panel.json", get(pv::panel::<F, R, S>))
        .route("/api/relay/toggle", post(pv::toggle::<F, R, S>))
}

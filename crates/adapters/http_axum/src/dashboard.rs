//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! Pages reload themselves through `<meta http-equiv="refresh">`; the relay
//! toggle is a plain form that posts back and redirects (PRG).

#[allow(clippy::missing_errors_doc)]
pub mod pv;
pub mod sensors;
pub mod webcam;

use axum::Router;
use axum::routing::{get, post};

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<F, R, S>() -> Router<AppState<F, R, S>>
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    Router::new()
        .route("/", get(webcam::high::<F, R, S>))
        .route("/webcam/h/", get(webcam::high::<F, R, S>))
        .route("/webcam/l/", get(webcam::low::<F, R, S>))
        .route("/pv", get(pv::page::<F, R, S>))
        .route("/pv/devices/toggle", post(pv::toggle::<F, R, S>))
        .route("/sensors", get(sensors::page::<F, R, S>))
}

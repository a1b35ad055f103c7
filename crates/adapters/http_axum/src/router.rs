//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use homewatch_app::ports::{FileSystem, ImageRenderer, RelaySwitch};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the JSON routes and the dashboard pages, and serves the video
/// archive under `/webcam/videos` when a directory is configured.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<F, R, S>(state: AppState<F, R, S>) -> Router
where
    F: FileSystem + 'static,
    R: ImageRenderer + 'static,
    S: RelaySwitch + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<F, R, S>())
        .merge(crate::dashboard::routes::<F, R, S>());

    if let Some(dir) = &state.pages.video_dir {
        router = router.nest_service("/webcam/videos", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

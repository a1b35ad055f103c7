//! # homewatchd — homewatch daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Construct the file-system, image and HTTP client adapters
//! - Construct application services, injecting adapters via port traits
//! - Start the pv feed poller
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use homewatch_adapter_fs::{JpegRenderer, TokioFileSystem};
use homewatch_adapter_http_axum::state::{AppState, PageSettings};
use homewatch_adapter_http_client::{HttpFeedClient, HttpRelaySwitch, build_client};
use homewatch_app::poller::Poller;
use homewatch_app::services::image_service::ImageService;
use homewatch_app::services::panel_service::PanelService;
use homewatch_app::services::relay_service::RelayService;
use homewatch_app::services::sensor_service::SensorService;
use homewatch_app::services::video_service::VideoService;
use homewatch_app::services::weather_service::WeatherService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter).context("invalid log filter")?)
        .init();

    // Adapters
    let fs = TokioFileSystem;
    let renderer = JpegRenderer::new(config.pages.jpeg_quality);
    let client = build_client(config.pv.timeout())?;
    let feeds = Arc::new(HttpFeedClient::new(client.clone(), &config.pv.base_url)?);
    let switch = HttpRelaySwitch::new(client, config.pv.relay_base_url())?;

    // Services
    let panel_service = Arc::new(PanelService::new(&config.pv.rule_table()));
    let poller = Poller::spawn(config.pv.poll_targets(), feeds, Arc::clone(&panel_service));

    let state = AppState::new(
        SensorService::new(fs, config.paths.sensor_log.clone(), config.sensors.filter()),
        WeatherService::new(fs, (&config.paths.weather).into()),
        VideoService::new(fs, config.paths.videos.clone()),
        ImageService::new(fs, renderer, config.paths.images.clone()),
        panel_service,
        RelayService::new(switch),
        PageSettings {
            webcam_refresh_seconds: config.pages.webcam_refresh_seconds,
            pv_refresh_seconds: config.pages.pv_refresh_seconds,
            sensors_refresh_seconds: config.pages.sensors_refresh_seconds,
            webcam_image: config.pages.webcam_image.clone(),
            video_dir: config.paths.served_videos(),
        },
    );
    let app = homewatch_adapter_http_axum::router::build(state);

    // HTTP
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(address = %bind_addr, feeds = poller.len(), "homewatchd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller.shutdown();
    tracing::info!("homewatchd stopped");
    Ok(())
}

/// Resolve on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

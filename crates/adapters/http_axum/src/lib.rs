//! # homewatch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON snapshots** the webcam and pv pages are built from
//!   (`/webcam/sensors.json`, `/webcam/weather.json`, `/pv/panel.json`, …)
//! - Serve webcam pictures at full or half size (`/webcam/image`)
//! - Accept relay toggles (`POST /api/relay/toggle`)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript** — pure HTML forms + `<meta http-equiv="refresh">`
//!   for live updates
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML (askama templates).
//! - The relay toggle is a `<form>` that POSTs back to the server and
//!   redirects (PRG pattern).
//! - The pv panel is kept current by the server-side poller; the page only
//!   reloads itself.
//!
//! ## Dependency rule
//! Depends on `homewatch-app` (for port traits and services) and
//! `homewatch-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;

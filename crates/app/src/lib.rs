//! # homewatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FileSystem` — read the flat files the producers write
//!   - `ImageRenderer` — re-encode webcam JPEGs
//!   - `FeedClient` — fetch the pv state feeds
//!   - `RelaySwitch` — send relay toggles
//! - Define **services** driven by the HTTP adapter:
//!   - `SensorService`, `WeatherService`, `VideoService`, `ImageService`
//!   - `PanelService` — owns the live dashboard panel
//!   - `RelayService` — toggles relays with an observable outcome
//! - Run the **poller** that keeps the panel current
//!
//! ## Dependency rule
//! Depends on `homewatch-domain` only (plus `tokio` for locks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod poller;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;

//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod image_service;
pub mod panel_service;
pub mod relay_service;
pub mod sensor_service;
pub mod video_service;
pub mod weather_service;

//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the service layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod feed_client;
pub mod file_system;
pub mod image_renderer;
pub mod relay_switch;

pub use feed_client::FeedClient;
pub use file_system::{DirEntry, FileSystem};
pub use image_renderer::ImageRenderer;
pub use relay_switch::RelaySwitch;

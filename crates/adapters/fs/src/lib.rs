//! # homewatch-adapter-fs
//!
//! Local file-system adapter.
//!
//! ## Responsibilities
//! - Implement the `FileSystem` port with `tokio::fs`
//! - Implement the `ImageRenderer` port with the [image](https://docs.rs/image) crate
//! - Map io and decoding failures onto the domain error
//!
//! ## Dependency rule
//! Depends on `homewatch-app` (for port traits) and `homewatch-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod file_system;
pub mod jpeg;

pub use file_system::TokioFileSystem;
pub use jpeg::JpegRenderer;

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomewatchError`] via `From`, so port boundaries only ever see this enum.

/// Top-level error shared by the domain, application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum HomewatchError {
    /// A domain invariant was violated by caller-supplied input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A requested artifact (file, feed) does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// An IO boundary (file system, HTTP) failed.
    #[error("io error")]
    Io(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected while building domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An image name was empty.
    #[error("image name must not be empty")]
    EmptyImageName,

    /// An image name contained a path separator or a parent reference.
    #[error("image name must be a bare file name")]
    UnsafeImageName,

    /// A relay command targeted a device without an id.
    #[error("relay command requires a non-zero device id")]
    ZeroDeviceId,

    /// A relay command had no host.
    #[error("relay command requires a host")]
    EmptyHost,

    /// A relay command host would change the gateway path or query.
    #[error("relay host must be a bare host name")]
    UnsafeHost,

    /// A poll target or rule referenced an unknown feed.
    #[error("unknown feed {0:?}")]
    UnknownFeed(String),
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {name}")]
pub struct NotFoundError {
    /// What was looked up (e.g. `"Image"`).
    pub kind: &'static str,
    /// The name that was not found.
    pub name: String,
}

impl HomewatchError {
    /// Wrap an arbitrary IO-side error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Box::new(err))
    }
}

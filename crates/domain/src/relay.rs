//! Relay commands — toggling a switchable device's power relay.

use serde::{Deserialize, Serialize};

use crate::dashboard::parse_device_id;
use crate::error::ValidationError;

/// A validated request to toggle one relay of one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayCommand {
    host: String,
    id: String,
    relay: u32,
}

impl RelayCommand {
    /// Build a toggle command.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyHost`] when `host` is blank,
    /// [`ValidationError::UnsafeHost`] when it holds a path, query or
    /// fragment delimiter, and [`ValidationError::ZeroDeviceId`] when `id`
    /// is missing, not hex, or zero (`"000000"`).
    pub fn new(
        host: impl Into<String>,
        id: impl Into<String>,
        relay: u32,
    ) -> Result<Self, ValidationError> {
        let host = host.into().trim().to_string();
        if host.is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        if host.contains(['/', '\\', '?', '#', '%'])
            || host.contains("..")
            || host.contains(char::is_whitespace)
        {
            return Err(ValidationError::UnsafeHost);
        }
        let id = id.into();
        if !parse_device_id(&id).is_some_and(|parsed| parsed != 0) {
            return Err(ValidationError::ZeroDeviceId);
        }
        Ok(Self { host, id, relay })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn relay(&self) -> u32 {
        self.relay
    }

    /// Request path of the toggle, relative to the relay gateway.
    #[must_use]
    pub fn path(&self) -> String {
        if self.relay == 0 {
            format!("/{}/cm?cmnd=Power%20TOGGLE", self.host)
        } else {
            format!("/{}/cm?cmnd=Power{}%20TOGGLE", self.host, self.relay)
        }
    }
}

/// Observable result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayOutcome {
    /// Whether the gateway answered with a success status.
    pub accepted: bool,
    /// HTTP status of the gateway, `None` when it could not be reached.
    pub status: Option<u16>,
}

impl RelayOutcome {
    /// Outcome of a response with `status`.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self {
            accepted: (200..300).contains(&status),
            status: Some(status),
        }
    }

    /// Outcome when the gateway was unreachable.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            accepted: false,
            status: None,
        }
    }
}

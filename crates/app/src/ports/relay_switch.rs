//! Relay switch port — sending toggle commands to the relay gateway.

use std::future::Future;

use homewatch_domain::error::HomewatchError;
use homewatch_domain::relay::RelayCommand;

/// Sends relay commands.
pub trait RelaySwitch: Send + Sync {
    /// Send `command` and return the HTTP status the gateway answered with.
    ///
    /// An error means the gateway could not be reached at all.
    fn send(&self, command: &RelayCommand)
    -> impl Future<Output = Result<u16, HomewatchError>> + Send;
}

//! Relay service — toggling device relays with an observable outcome.

use homewatch_domain::relay::{RelayCommand, RelayOutcome};

use crate::ports::RelaySwitch;

pub struct RelayService<S> {
    switch: S,
}

impl<S: RelaySwitch> RelayService<S> {
    pub fn new(switch: S) -> Self {
        Self { switch }
    }

    /// Send a toggle. Failures are logged and reported in the outcome,
    /// never returned as errors.
    #[tracing::instrument(skip(self), fields(host = command.host(), relay = command.relay()))]
    pub async fn toggle(&self, command: &RelayCommand) -> RelayOutcome {
        match self.switch.send(command).await {
            Ok(status) => {
                let outcome = RelayOutcome::from_status(status);
                if outcome.accepted {
                    tracing::info!(status, "relay toggled");
                } else {
                    tracing::warn!(status, "relay gateway refused toggle");
                }
                outcome
            }
            Err(err) => {
                tracing::warn!(error = ?err, "relay gateway unreachable");
                RelayOutcome::unreachable()
            }
        }
    }
}

//! reqwest implementation of [`RelaySwitch`].

use std::future::Future;

use homewatch_app::ports::RelaySwitch;
use homewatch_domain::error::HomewatchError;
use homewatch_domain::relay::RelayCommand;

use crate::error::HttpClientError;

/// Sends toggles to the relay gateway, which forwards `/<host>/cm?...` to
/// the device.
#[derive(Debug, Clone)]
pub struct HttpRelaySwitch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelaySwitch {
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, HttpClientError> {
        Ok(Self {
            client,
            base_url: crate::base_url(base_url)?,
        })
    }
}

impl RelaySwitch for HttpRelaySwitch {
    fn send(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<u16, HomewatchError>> + Send {
        let url = format!("{}{}", self.base_url, command.path());
        let client = self.client.clone();
        async move {
            tracing::debug!(%url, "sending relay command");
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(HttpClientError::from)?;
            Ok(response.status().as_u16())
        }
    }
}

//! Feed client port — fetching the JSON state feeds of the energy controller.

use std::future::Future;

use homewatch_domain::error::HomewatchError;

/// Fetches one JSON document by path.
pub trait FeedClient: Send + Sync {
    /// GET `path` relative to the feed base URL and parse the body as JSON.
    fn fetch(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<serde_json::Value, HomewatchError>> + Send;
}

//! reqwest implementation of [`FeedClient`].

use std::future::Future;

use homewatch_app::ports::FeedClient;
use homewatch_domain::error::HomewatchError;

use crate::error::HttpClientError;

/// Fetches feeds below a base URL.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeedClient {
    /// Create a client fetching feeds below `base_url`.
    ///
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

impl FeedClient for HttpFeedClient {
    fn fetch(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<serde_json::Value, HomewatchError>> + Send {
        let url = format!("{}{path}", self.base_url);
        let client = self.client.clone();
        async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(HttpClientError::from)?;
            let status = response.status();
            if !status.is_success() {
                return Err(HttpClientError::Status(status.as_u16()).into());
            }
            let body = response
                .json::<serde_json::Value>()
                .await
                .map_err(HttpClientError::from)?;
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_client;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::time::Duration;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    fn client(base: &str) -> HttpFeedClient {
        HttpFeedClient::new(build_client(Duration::from_secs(2)).unwrap(), base).unwrap()
    }

    #[tokio::test]
    async fn should_fetch_json_feed() {
        let base = serve(Router::new().route(
            "/pv/data/dstate.json",
            get(|| async { axum::Json(serde_json::json!({"ramp": 100})) }),
        ))
        .await;

        let body = client(&base).fetch("/pv/data/dstate.json").await.unwrap();
        assert_eq!(body["ramp"], 100);
    }

    #[tokio::test]
    async fn should_fail_on_error_status() {
        let base = serve(Router::new().route(
            "/pv/data/gstate.json",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;

        let err = client(&base)
            .fetch("/pv/data/gstate.json")
            .await
            .unwrap_err();
        assert!(matches!(err, HomewatchError::Io(_)));
    }

    #[tokio::test]
    async fn should_fail_on_invalid_json() {
        let base = serve(Router::new().route("/bad.json", get(|| async { "{not json" }))).await;
        assert!(client(&base).fetch("/bad.json").await.is_err());
    }
}

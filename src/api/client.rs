use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::api::error::FetchError;
use crate::api::source::PostsSource;
use crate::config::ApiConfig;
use crate::posts::Post;

/// Errors that can occur while building a [`PostsClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid posts endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// HTTP client for a JSON posts collection (`GET /posts`).
pub struct PostsClient {
    client: Client,
    endpoint: Url,
}

impl PostsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let raw = config.endpoint();
        let endpoint = Url::parse(&raw).map_err(|e| ClientError::InvalidEndpoint {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, endpoint })
    }

    /// The collection URL requests are issued against.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn page_url(&self, page: u32, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string())
            .append_pair("_limit", &limit.to_string());
        url
    }

    async fn get_posts(&self, url: Url) -> Result<Vec<Post>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Posts endpoint returned error status");
            return Err(FetchError::Network);
        }

        let body = response.bytes().await?;
        let posts = serde_json::from_slice(&body)?;
        Ok(posts)
    }
}

#[async_trait]
impl PostsSource for PostsClient {
    async fn fetch_page(&self, page: u32, limit: usize) -> Result<Vec<Post>, FetchError> {
        self.get_posts(self.page_url(page, limit)).await
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, FetchError> {
        self.get_posts(self.endpoint.clone()).await
    }
}

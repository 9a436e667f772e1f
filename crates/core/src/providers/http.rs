use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::asset::{AssetRequest, AssetResponse};
use super::traits::AssetSource;

/// Fetches page assets over HTTP from a fixed origin.
pub struct HttpAssetSource {
    client: Client,
    base_url: String,
}

impl HttpAssetSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AssetSource for HttpAssetSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, CoreError> {
        let url = self.url_for(&request.url);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            debug!(url = %url, %status, "non-success asset response");
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().await?.to_vec();

        Ok(AssetResponse {
            url: request.url.clone(),
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

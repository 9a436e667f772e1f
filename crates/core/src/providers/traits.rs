use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::{AssetRequest, AssetResponse};

/// Where the offline cache goes when an asset is not cached yet.
///
/// Implemented by the HTTP source in production and by in-memory fakes in
/// tests, so the cache strategy can be exercised without a network.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AssetSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch one asset. Any HTTP status comes back as a response; only a
    /// failure to get a response at all is an error.
    async fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, CoreError>;
}

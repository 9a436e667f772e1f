use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::asset::{AssetCache, AssetRequest, AssetResponse, CacheStorage};
use crate::providers::traits::AssetSource;

/// Offline layer for page assets.
///
/// Cache strategy:
/// - **Install**: every shell asset is fetched and stored up front. One failure
///   aborts the install and nothing is stored.
/// - **Fetch**: cache first. On a miss, go to the source and keep successful
///   responses. If the source fails on a navigation, serve the cached root document.
/// - **Activate**: caches from previous versions are deleted.
pub struct AssetCacheService {
    storage: CacheStorage,
    cache_name: String,
    root_document: String,
}

impl AssetCacheService {
    pub fn new(cache_name: impl Into<String>, root_document: impl Into<String>) -> Self {
        Self::with_storage(CacheStorage::new(), cache_name, root_document)
    }

    /// Resume from previously persisted caches.
    pub fn with_storage(
        storage: CacheStorage,
        cache_name: impl Into<String>,
        root_document: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            cache_name: cache_name.into(),
            root_document: root_document.into(),
        }
    }

    #[must_use]
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    #[must_use]
    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// The current cache, if anything has been stored in it yet.
    #[must_use]
    pub fn current(&self) -> Option<&AssetCache> {
        self.storage.get(&self.cache_name)
    }

    /// Pre-populate the current cache with the shell assets.
    /// Returns the number of assets stored.
    pub async fn install(
        &mut self,
        source: &dyn AssetSource,
        shell_assets: &[String],
    ) -> Result<usize, CoreError> {
        let mut fetched = Vec::with_capacity(shell_assets.len());
        for url in shell_assets {
            let response = source.fetch(&AssetRequest::asset(url.clone())).await?;
            if !response.is_success() {
                return Err(CoreError::Fetch {
                    url: url.clone(),
                    message: format!("unexpected status {}", response.status),
                });
            }
            fetched.push(response);
        }

        let count = fetched.len();
        let cache = self.storage.open(&self.cache_name);
        for response in fetched {
            cache.put(response);
        }
        debug!(cache = %self.cache_name, count, source = source.name(), "shell assets installed");
        Ok(count)
    }

    /// Drop caches left over from older versions. Returns their names.
    pub fn activate(&mut self) -> Vec<String> {
        let removed = self.storage.retain_only(&self.cache_name);
        if !removed.is_empty() {
            debug!(?removed, "stale asset caches deleted");
        }
        removed
    }

    /// Serve a request cache-first, falling back to the source, then to the
    /// cached root document for navigations.
    pub async fn fetch(
        &mut self,
        source: &dyn AssetSource,
        request: &AssetRequest,
    ) -> Result<AssetResponse, CoreError> {
        if let Some(hit) = self.current().and_then(|c| c.get(&request.url)) {
            return Ok(hit.clone());
        }

        match source.fetch(request).await {
            Ok(response) => {
                if response.is_success() {
                    self.storage.open(&self.cache_name).put(response.clone());
                }
                Ok(response)
            }
            Err(e) => {
                warn!(url = %request.url, source = source.name(), error = %e, "asset fetch failed");
                if request.is_navigation() {
                    if let Some(root) = self.current().and_then(|c| c.get(&self.root_document)) {
                        return Ok(root.clone());
                    }
                    return Err(CoreError::AssetNotCached(self.root_document.clone()));
                }
                Err(e)
            }
        }
    }
}

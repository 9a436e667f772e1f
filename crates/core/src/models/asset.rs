use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a request was made. Navigations get the root-document fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMode {
    /// Top-level page load
    Navigate,
    /// Script, stylesheet, image, manifest...
    Asset,
}

/// A request for a page asset, keyed by its URL path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRequest {
    pub url: String,
    pub mode: RequestMode,
}

impl AssetRequest {
    pub fn asset(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Asset,
        }
    }

    pub fn navigate(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Navigate,
        }
    }

    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }
}

/// A fetched (or cached) asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl AssetResponse {
    /// Only 2xx responses are worth keeping.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One named cache: URL → stored response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCache {
    pub name: String,
    pub entries: HashMap<String, AssetResponse>,
}

impl AssetCache {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, url: &str) -> Option<&AssetResponse> {
        self.entries.get(url)
    }

    /// Insert or replace the entry for the response URL.
    pub fn put(&mut self, response: AssetResponse) {
        self.entries.insert(response.url.clone(), response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All named caches known to the offline layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStorage {
    pub caches: HashMap<String, AssetCache>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cache with the given name, creating it if needed.
    pub fn open(&mut self, name: &str) -> &mut AssetCache {
        self.caches
            .entry(name.to_string())
            .or_insert_with(|| AssetCache::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&AssetCache> {
        self.caches.get(name)
    }

    /// Delete every cache except `keep`. Returns the names removed, sorted.
    pub fn retain_only(&mut self, keep: &str) -> Vec<String> {
        let mut removed: Vec<String> = self
            .caches
            .keys()
            .filter(|name| name.as_str() != keep)
            .cloned()
            .collect();
        removed.sort();
        for name in &removed {
            self.caches.remove(name);
        }
        removed
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caches.keys().cloned().collect();
        names.sort();
        names
    }
}

use std::collections::HashMap;

use crate::errors::CoreError;

/// String-keyed, string-valued persistent store (browser local storage or
/// its native stand-in). Writes are synchronous and last-writer-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

/// In-memory store. Used by WASM frontends that mirror into local storage
/// themselves, and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use super::KeyValueStore;
    use crate::errors::CoreError;

    const EXTENSION: &str = "json";
    const TMP_SUFFIX: &str = "tmp";

    /// Directory-backed store: one `<key>.json` file per key (native only).
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
            let dir = dir.into();
            fs::create_dir_all(&dir)?;
            Ok(Self { dir })
        }

        #[must_use]
        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// Path of the file backing `key`.
        pub fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && !key.starts_with('.');
            if !valid {
                return Err(CoreError::Storage(format!("invalid storage key '{key}'")));
            }
            Ok(self.dir.join(format!("{key}.{EXTENSION}")))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
            let path = self.path_for(key)?;
            if !path.exists() {
                return Ok(None);
            }
            Ok(Some(fs::read_to_string(path)?))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
            let path = self.path_for(key)?;
            let tmp = path.with_extension(format!("{EXTENSION}.{TMP_SUFFIX}"));
            {
                let mut file = fs::File::create(&tmp)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            fs::rename(&tmp, &path)?;
            Ok(())
        }

        fn remove(&mut self, key: &str) -> Result<(), CoreError> {
            let path = self.path_for(key)?;
            match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::session::Session;
use crate::models::settings::Settings;

use super::format;
use super::kv::KeyValueStore;

/// High-level storage operations: ledger snapshot and session marker
/// to/from a key-value store.
///
/// Every save is a full rewrite of the key. There is no batching and no
/// partial update.
pub struct StorageManager<S: KeyValueStore> {
    store: S,
    ledger_key: String,
    session_key: String,
    history_limit: usize,
}

impl<S: KeyValueStore> StorageManager<S> {
    pub fn new(store: S, settings: &Settings) -> Self {
        Self {
            store,
            ledger_key: settings.ledger_key.clone(),
            session_key: settings.session_key.clone(),
            history_limit: settings.history_limit,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the persisted ledger.
    ///
    /// Absent → empty ledger. Present but invalid → the record is removed
    /// and an empty ledger is returned. Only store failures are errors.
    pub fn load_ledger(&mut self) -> Result<Ledger, CoreError> {
        let Some(raw) = self.store.get(&self.ledger_key)? else {
            debug!(key = %self.ledger_key, "no persisted ledger, starting empty");
            return Ok(Ledger::empty());
        };

        match format::decode_ledger(&raw, self.history_limit) {
            Ok(ledger) => Ok(ledger),
            Err(e) => {
                warn!(key = %self.ledger_key, error = %e, "discarding corrupt ledger");
                self.store.remove(&self.ledger_key)?;
                Ok(Ledger::empty())
            }
        }
    }

    /// Overwrite the persisted ledger with `ledger`.
    pub fn save_ledger(&mut self, ledger: &Ledger) -> Result<(), CoreError> {
        let json = format::encode_ledger(ledger)?;
        self.store.set(&self.ledger_key, &json)
    }

    /// Read the session marker. A corrupt marker is removed and treated as absent.
    pub fn load_session(&mut self) -> Result<Option<Session>, CoreError> {
        let Some(raw) = self.store.get(&self.session_key)? else {
            return Ok(None);
        };

        match format::decode_session(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(key = %self.session_key, error = %e, "discarding corrupt session marker");
                self.store.remove(&self.session_key)?;
                Ok(None)
            }
        }
    }

    pub fn save_session(&mut self, session: &Session) -> Result<(), CoreError> {
        let json = format::encode_session(session)?;
        self.store.set(&self.session_key, &json)
    }

    pub fn clear_session(&mut self) -> Result<(), CoreError> {
        self.store.remove(&self.session_key)
    }
}

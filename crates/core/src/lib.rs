pub mod errors;
pub mod logging;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;
pub mod time;

use tracing::info;

use errors::CoreError;
use models::{
    ledger::Ledger,
    session::Session,
    settings::Settings,
    summary::{FormattedSummary, LedgerSummary},
    transaction::{AccountView, Transaction},
};
use services::{
    history_service::HistoryService,
    ledger_service::{LedgerOperation, LedgerService},
    session_service::SessionService,
    summary_service::SummaryService,
};
use storage::{format, kv::KeyValueStore, manager::StorageManager};
use time::{Clock, SystemClock};

/// Main entry point for the Finance Tracker core library.
/// Holds the current ledger snapshot, the session and the store they persist to.
#[must_use]
pub struct FinanceTracker<S: KeyValueStore> {
    ledger: Ledger,
    session: Option<Session>,
    storage: StorageManager<S>,
    settings: Settings,
    clock: Box<dyn Clock>,
    ledger_service: LedgerService,
    history_service: HistoryService,
    session_service: SessionService,
    summary_service: SummaryService,
}

impl<S: KeyValueStore> std::fmt::Debug for FinanceTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("checking", &self.ledger.checking_balance)
            .field("savings", &self.ledger.savings_balance)
            .field("transactions", &self.ledger.transactions.len())
            .field("session", &self.session.as_ref().map(|s| s.name.as_str()))
            .finish()
    }
}

impl<S: KeyValueStore> FinanceTracker<S> {
    /// Open a tracker on `store` with default settings and the system clock.
    pub fn open(store: S) -> Result<Self, CoreError> {
        Self::open_with(store, Settings::default(), Box::new(SystemClock))
    }

    /// Open a tracker, rehydrating ledger and session from `store`.
    /// A missing or corrupt ledger starts empty.
    pub fn open_with(store: S, settings: Settings, clock: Box<dyn Clock>) -> Result<Self, CoreError> {
        settings.validate()?;
        let mut storage = StorageManager::new(store, &settings);
        let ledger = storage.load_ledger()?;
        let session = storage.load_session()?;

        Ok(Self {
            ledger,
            session,
            storage,
            ledger_service: LedgerService::with_history_limit(settings.history_limit),
            history_service: HistoryService::new(settings.history_limit),
            session_service: SessionService::new(),
            summary_service: SummaryService::new(),
            settings,
            clock,
        })
    }

    /// Close the tracker and hand back the underlying store.
    pub fn into_store(self) -> S {
        self.storage.into_inner()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.storage.store()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Check credentials and persist the session marker on success.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&Session, CoreError> {
        let session = self.session_service.login(username, password)?;
        self.storage.save_session(&session)?;
        Ok(&*self.session.insert(session))
    }

    /// Forget the session, in memory and in storage.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        self.storage.clear_session()?;
        if let Some(session) = self.session.take() {
            info!(username = %session.name, "logged out");
        }
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.name.as_str())
    }

    // ── Ledger ──────────────────────────────────────────────────────

    /// The current ledger snapshot (readable without a session).
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validate and apply one operation, then persist the new snapshot.
    ///
    /// On any error (validation, funds, storage) the current ledger is unchanged.
    pub fn apply(&mut self, op: LedgerOperation) -> Result<&Transaction, CoreError> {
        self.require_session()?;
        let (next, _tx) = self
            .ledger_service
            .apply(&self.ledger, &op, self.clock.today())?;
        self.commit(next)?;
        self.ledger
            .transactions
            .first()
            .ok_or_else(|| CoreError::Storage("recorded transaction missing from history".into()))
    }

    pub fn transfer_to_savings(&mut self, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::TransferToSavings {
            amount: amount.to_string(),
        })
    }

    pub fn transfer_to_checking(&mut self, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::TransferToChecking {
            amount: amount.to_string(),
        })
    }

    pub fn pay_bill(&mut self, description: &str, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::PayBill {
            description: description.to_string(),
            amount: amount.to_string(),
        })
    }

    pub fn add_money(&mut self, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::AddMoney {
            amount: amount.to_string(),
        })
    }

    pub fn set_savings_goal(&mut self, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::SetGoal {
            amount: amount.to_string(),
        })
    }

    pub fn edit_checking_balance(&mut self, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::EditChecking {
            amount: amount.to_string(),
        })
    }

    pub fn edit_savings_balance(&mut self, amount: &str) -> Result<&Transaction, CoreError> {
        self.apply(LedgerOperation::EditSavings {
            amount: amount.to_string(),
        })
    }

    /// Reset to the empty ledger and write it out immediately.
    pub fn clear_all_data(&mut self) -> Result<(), CoreError> {
        self.require_session()?;
        self.commit(Ledger::empty())?;
        info!("all ledger data cleared");
        Ok(())
    }

    // ── History & Summary ───────────────────────────────────────────

    /// Transactions visible in `view`, newest first.
    #[must_use]
    pub fn history(&self, view: AccountView) -> Vec<&Transaction> {
        self.history_service.filter(&self.ledger.transactions, view)
    }

    /// The `n` most recent transactions visible in `view`.
    #[must_use]
    pub fn recent(&self, view: AccountView, n: usize) -> Vec<&Transaction> {
        self.history_service.latest(&self.ledger.transactions, view, n)
    }

    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        self.summary_service.summarize(&self.ledger)
    }

    #[must_use]
    pub fn formatted_summary(&self) -> FormattedSummary {
        let summary = self.summary();
        self.summary_service
            .format(&summary, &self.settings.currency_symbol)
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// The current ledger as a formatted JSON document.
    pub fn export_json(&self) -> Result<String, CoreError> {
        self.require_session()?;
        format::encode_ledger(&self.ledger)
    }

    /// Download name for an export made today.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format::export_file_name(&self.settings.export_prefix, self.clock.today())
    }

    /// Replace the ledger with a previously exported document.
    /// Unlike loading at startup, an invalid document is reported, not discarded.
    pub fn import_json(&mut self, json: &str) -> Result<&Ledger, CoreError> {
        self.require_session()?;
        let ledger = format::decode_ledger(json, self.settings.history_limit)?;
        self.commit(ledger)?;
        info!(
            transactions = self.ledger.transactions.len(),
            "ledger imported"
        );
        Ok(&self.ledger)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn require_session(&self) -> Result<(), CoreError> {
        if self.session.is_none() {
            return Err(CoreError::NotAuthenticated);
        }
        Ok(())
    }

    /// Persist `next`, then make it the current snapshot.
    fn commit(&mut self, next: Ledger) -> Result<(), CoreError> {
        self.storage.save_ledger(&next)?;
        self.ledger = next;
        Ok(())
    }
}

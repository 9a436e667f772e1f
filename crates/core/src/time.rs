use chrono::NaiveDate;

/// Source of "today" for transaction dates and export file names.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    #[cfg(target_arch = "wasm32")]
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Clock pinned to one date. Useful for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

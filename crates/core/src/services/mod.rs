pub mod asset_cache_service;
pub mod history_service;
pub mod ledger_service;
pub mod session_service;
pub mod summary_service;

pub mod asset;
pub mod ledger;
pub mod money;
pub mod session;
pub mod settings;
pub mod summary;
pub mod transaction;

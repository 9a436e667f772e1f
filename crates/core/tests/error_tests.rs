// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;
use finance_tracker_core::models::transaction::Account;
use rust_decimal::Decimal;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_amount_hides_raw_input() {
        let err = CoreError::InvalidAmount("12abc".into());
        assert_eq!(err.to_string(), "Please enter a valid amount");
    }

    #[test]
    fn missing_description() {
        assert_eq!(
            CoreError::MissingDescription.to_string(),
            "Please enter a bill description"
        );
    }

    #[test]
    fn insufficient_funds_names_account() {
        let err = CoreError::InsufficientFunds {
            account: Account::Checking,
            requested: Decimal::new(60000, 2),
            available: Decimal::new(50000, 2),
        };
        assert_eq!(err.to_string(), "Insufficient funds in checking");

        let err = CoreError::InsufficientFunds {
            account: Account::Savings,
            requested: Decimal::ONE,
            available: Decimal::ZERO,
        };
        assert_eq!(err.to_string(), "Insufficient funds in savings");
    }

    #[test]
    fn invalid_credentials_is_generic() {
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn not_authenticated() {
        assert_eq!(CoreError::NotAuthenticated.to_string(), "Not logged in");
    }

    #[test]
    fn corrupt_state() {
        let err = CoreError::CorruptState("bad shape".into());
        assert_eq!(err.to_string(), "Stored ledger is invalid: bad shape");
    }

    #[test]
    fn storage() {
        let err = CoreError::Storage("disk full".into());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("history_limit must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid settings: history_limit must be at least 1"
        );
    }

    #[test]
    fn fetch() {
        let err = CoreError::Fetch {
            url: "/index.html".into(),
            message: "HTTP 503 Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Fetch failed for /index.html: HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn asset_not_cached() {
        let err = CoreError::AssetNotCached("/".into());
        assert_eq!(err.to_string(), "Asset not cached: /");
    }
}

// ── Classification ──────────────────────────────────────────────────

mod classification {
    use super::*;

    #[test]
    fn validation_and_funds_are_user_facing() {
        assert!(CoreError::InvalidAmount(String::new()).is_user_facing());
        assert!(CoreError::MissingDescription.is_user_facing());
        assert!(CoreError::InvalidCredentials.is_user_facing());
        assert!(CoreError::InsufficientFunds {
            account: Account::Checking,
            requested: Decimal::TEN,
            available: Decimal::ONE,
        }
        .is_user_facing());
    }

    #[test]
    fn system_faults_are_not_user_facing() {
        assert!(!CoreError::Storage("io".into()).is_user_facing());
        assert!(!CoreError::CorruptState("x".into()).is_user_facing());
        assert!(!CoreError::Network("offline".into()).is_user_facing());
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Storage(ref msg) if msg.contains("denied")));
    }
}

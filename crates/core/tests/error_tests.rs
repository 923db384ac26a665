// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::services::transaction_service::failure_notice;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            status: 400,
            body: r#"{"error":"Invalid ticker"}"#.into(),
        };
        assert_eq!(
            err.to_string(),
            r#"API error (HTTP 400): {"error":"Invalid ticker"}"#
        );
    }

    #[test]
    fn api_error_empty_body() {
        let err = CoreError::Api {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): ");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("expected value".into());
        assert_eq!(err.to_string(), "Deserialization error: expected value");
    }

    #[test]
    fn stock_lookup() {
        let err = CoreError::StockLookup {
            ticker: "ZZZZ".into(),
            message: "No data found".into(),
        };
        assert_eq!(err.to_string(), "Stock lookup failed for ZZZZ: No data found");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("shares 'ten' is not a number".into());
        assert_eq!(
            err.to_string(),
            "Transaction validation failed: shares 'ten' is not a number"
        );
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("base_url must not be empty".into());
        assert_eq!(err.to_string(), "Invalid settings: base_url must not be empty");
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

mod helpers {
    use super::*;

    #[test]
    fn status_only_for_api_errors() {
        let api = CoreError::Api {
            status: 422,
            body: "{}".into(),
        };
        assert_eq!(api.status(), Some(422));
        assert_eq!(CoreError::Network("x".into()).status(), None);
    }

    #[test]
    fn is_network() {
        assert!(CoreError::Network("x".into()).is_network());
        assert!(!CoreError::Deserialization("x".into()).is_network());
    }
}

// ── Submit notices ──────────────────────────────────────────────────

mod notices {
    use super::*;

    #[test]
    fn server_rejection_echoes_payload() {
        let err = CoreError::Api {
            status: 400,
            body: r#"{"error":"shares must be positive"}"#.into(),
        };
        assert_eq!(
            failure_notice(&err).message,
            r#"Error adding transaction: {"error":"shares must be positive"}"#
        );
    }

    #[test]
    fn network_failure_is_generic() {
        let err = CoreError::Network("connection reset".into());
        assert_eq!(failure_notice(&err).message, "Failed to add transaction");
    }

    #[test]
    fn parse_failure_is_generic() {
        let err = CoreError::Deserialization("eof".into());
        assert_eq!(failure_notice(&err).message, "Failed to add transaction");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Deserialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Deserialization, got {:?}", other),
        }
    }

    #[test]
    fn from_serde_json_error_eof() {
        let json_err = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::Deserialization(_)));
    }
}

// ── Error is std::error::Error ──────────────────────────────────────

mod std_error {
    use super::*;

    #[test]
    fn core_error_implements_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::Network("test".into()));
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn core_error_implements_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CoreError>();
    }

    #[test]
    fn core_error_implements_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<CoreError>();
    }
}

// ═══════════════════════════════════════════════════════════════════
// Client Tests — error taxonomy, status mapping, auth short-circuit
// ═══════════════════════════════════════════════════════════════════

use wallet_dashboard_core::client::http::{classify_error, HttpWalletBackend};
use wallet_dashboard_core::client::traits::WalletBackend;
use wallet_dashboard_core::errors::WalletError;
use wallet_dashboard_core::models::config::ClientConfig;
use wallet_dashboard_core::session::SessionContext;

// ── Status mapping ──────────────────────────────────────────────────

mod status_mapping {
    use super::*;

    #[test]
    fn http_401_is_unauthenticated() {
        assert!(matches!(
            classify_error(401, ""),
            WalletError::Unauthenticated
        ));
    }

    #[test]
    fn http_4xx_carries_server_message_verbatim() {
        let err = classify_error(400, r#"{"error": "Saldo insuficiente"}"#);
        match err {
            WalletError::Rejected(msg) => assert_eq!(msg, "Saldo insuficiente"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn http_4xx_without_message_falls_back_to_generic() {
        let err = classify_error(422, "not json at all");
        match err {
            WalletError::Rejected(msg) => assert_eq!(msg, "Request rejected by the server."),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn http_5xx_is_server_error() {
        assert!(matches!(
            classify_error(500, ""),
            WalletError::ServerError(500)
        ));
        assert!(matches!(
            classify_error(503, r#"{"error": "down"}"#),
            WalletError::ServerError(503)
        ));
    }
}

// ── Error display & conversions ─────────────────────────────────────

mod errors {
    use super::*;

    #[test]
    fn rejected_displays_the_message_alone() {
        let err = WalletError::Rejected("Credenciais inválidas.".into());
        assert_eq!(err.to_string(), "Credenciais inválidas.");
    }

    #[test]
    fn unauthenticated_display() {
        assert_eq!(
            WalletError::Unauthenticated.to_string(),
            "Not authenticated — log in first"
        );
    }

    #[test]
    fn server_error_display_includes_status() {
        assert_eq!(
            WalletError::ServerError(502).to_string(),
            "Server error (HTTP 502)"
        );
    }

    #[test]
    fn provider_error_display() {
        let err = WalletError::Provider {
            provider: "CoinGecko".into(),
            message: "rate limited".into(),
        };
        assert_eq!(
            err.to_string(),
            "Market data error (CoinGecko): rate limited"
        );
    }

    #[test]
    fn json_error_converts_to_decode() {
        let bad: Result<u32, _> = serde_json::from_str("not json");
        let err: WalletError = bad.unwrap_err().into();
        assert!(matches!(err, WalletError::Decode(_)));
    }
}

// ── Auth short-circuit ──────────────────────────────────────────────

mod auth_short_circuit {
    use super::*;

    fn unroutable_backend(session: SessionContext) -> HttpWalletBackend {
        // Port 9 (discard) — any actual connection attempt would fail
        // as NetworkUnavailable, not Unauthenticated, so these tests
        // prove no network call happens.
        let config = ClientConfig {
            api_base_url: "http://127.0.0.1:9".into(),
            request_timeout_secs: 1,
            ..ClientConfig::default()
        };
        HttpWalletBackend::new(&config, session)
    }

    #[tokio::test]
    async fn balances_without_token_fails_immediately() {
        let backend = unroutable_backend(SessionContext::in_memory());
        let err = backend.balances().await.unwrap_err();
        assert!(matches!(err, WalletError::Unauthenticated));
    }

    #[tokio::test]
    async fn quotes_without_token_fails_immediately() {
        let backend = unroutable_backend(SessionContext::in_memory());
        let err = backend.quotes().await.unwrap_err();
        assert!(matches!(err, WalletError::Unauthenticated));
    }

    #[tokio::test]
    async fn trades_and_transfers_require_a_token() {
        let backend = unroutable_backend(SessionContext::in_memory());
        assert!(matches!(
            backend.buy("BTC", 100.0).await.unwrap_err(),
            WalletError::Unauthenticated
        ));
        assert!(matches!(
            backend.sell("BTC", 0.01).await.unwrap_err(),
            WalletError::Unauthenticated
        ));
        assert!(matches!(
            backend.transfer("bob", 10.0).await.unwrap_err(),
            WalletError::Unauthenticated
        ));
    }

    #[tokio::test]
    async fn token_present_reaches_the_network_instead() {
        let session = SessionContext::in_memory();
        session.set("tok-123");
        let backend = unroutable_backend(session);
        let err = backend.balances().await.unwrap_err();
        assert!(matches!(err, WalletError::NetworkUnavailable(_)));
    }
}

// ── Session ─────────────────────────────────────────────────────────

mod session {
    use super::*;

    #[test]
    fn set_then_current_round_trips() {
        let session = SessionContext::in_memory();
        assert!(!session.is_authenticated());
        session.set("tok-123");
        assert_eq!(session.current().as_deref(), Some("tok-123"));
    }

    #[test]
    fn clear_destroys_the_token() {
        let session = SessionContext::in_memory();
        session.set("tok-123");
        session.clear();
        assert!(session.current().is_none());
    }

    #[test]
    fn clones_share_the_store() {
        let a = SessionContext::in_memory();
        let b = a.clone();
        a.set("shared");
        assert_eq!(b.current().as_deref(), Some("shared"));
        b.clear();
        assert!(!a.is_authenticated());
    }
}

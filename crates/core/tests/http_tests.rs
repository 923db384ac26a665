// ═══════════════════════════════════════════════════════════════════
// HTTP client tests — endpoint URLs and offline failure handling
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use portfolio_dashboard_core::api::http::HttpPortfolioApi;
use portfolio_dashboard_core::api::traits::PortfolioApi;
use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::settings::ApiSettings;
use portfolio_dashboard_core::models::transaction::NewTransaction;
use portfolio_dashboard_core::PortfolioDashboard;

fn api() -> HttpPortfolioApi {
    HttpPortfolioApi::new(ApiSettings::default())
}

mod urls {
    use super::*;

    #[test]
    fn portfolio_endpoints() {
        let api = api();
        assert_eq!(api.summary_url(), "http://localhost:5000/api/portfolio/portfolio_123/summary");
        assert_eq!(
            api.allocation_url(),
            "http://localhost:5000/api/portfolio/portfolio_123/allocation"
        );
        assert_eq!(
            api.transactions_url(),
            "http://localhost:5000/api/portfolio/portfolio_123/transactions"
        );
        assert_eq!(
            api.create_transaction_url(),
            "http://localhost:5000/api/portfolio/portfolio_123/transaction"
        );
    }

    #[test]
    fn performance_carries_start_date() {
        let url = api().performance_url(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(
            url,
            "http://localhost:5000/api/portfolio/portfolio_123/performance?start_date=2024-01-01"
        );
    }

    #[test]
    fn utility_endpoints() {
        let api = api();
        assert_eq!(api.health_url(), "http://localhost:5000/api/health");
        assert_eq!(api.stock_url("aapl"), "http://localhost:5000/api/stock/AAPL");
    }

    #[test]
    fn trailing_slash_and_custom_portfolio() {
        let settings = ApiSettings::default()
            .with_base_url("https://dash.example.com/api/")
            .with_portfolio_id("family");
        let api = HttpPortfolioApi::new(settings);
        assert_eq!(api.summary_url(), "https://dash.example.com/api/portfolio/family/summary");
        assert_eq!(api.name(), "PortfolioAPI");
    }
}

mod offline {
    use super::*;

    /// Port 9 (discard) on localhost is not expected to serve HTTP.
    fn unreachable() -> ApiSettings {
        ApiSettings {
            base_url: "http://127.0.0.1:9/api".into(),
            request_timeout_secs: 2,
            ..ApiSettings::default()
        }
    }

    #[tokio::test]
    async fn sync_against_dead_backend_sets_error() {
        let mut dash = PortfolioDashboard::new(unreachable()).unwrap();
        let err = dash.sync().await.unwrap_err();
        assert!(err.is_network());
        let message = dash.view().error.clone().unwrap();
        assert!(message.contains("http://127.0.0.1:9/api"));
        assert!(!dash.view().loading);
    }

    #[tokio::test]
    async fn health_check_against_dead_backend() {
        let api = HttpPortfolioApi::new(unreachable());
        assert!(matches!(api.health_check().await, Err(CoreError::Network(_))));
    }

    #[test]
    fn new_rejects_invalid_settings() {
        let settings = ApiSettings::default().with_portfolio_id("");
        assert!(matches!(
            PortfolioDashboard::new(settings),
            Err(CoreError::InvalidSettings(_))
        ));
    }
}

mod exchange {
    use super::*;

    /// Answer exactly one request with `status` and `body`; returns settings
    /// pointing at the listener.
    async fn serve_once(status: &'static str, body: &'static str) -> ApiSettings {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        ApiSettings {
            base_url: format!("http://{addr}/api"),
            request_timeout_secs: 5,
            ..ApiSettings::default()
        }
    }

    /// Drain headers and a `Content-Length` body so the client sees a clean reply.
    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }

    fn purchase() -> NewTransaction {
        NewTransaction {
            ticker: "AAPL".into(),
            shares: 10.0,
            purchase_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            purchase_price: 150.25,
        }
    }

    #[tokio::test]
    async fn rejected_post_carries_compacted_json_body() {
        let settings = serve_once("400 Bad Request", "{ \"error\": \"Invalid ticker\" }").await;
        let api = HttpPortfolioApi::new(settings);
        match api.create_transaction(&purchase()).await {
            Err(CoreError::Api { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"error":"Invalid ticker"}"#);
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn accepted_post_is_ok() {
        let settings = serve_once("201 Created", r#"{"status": "ok"}"#).await;
        let api = HttpPortfolioApi::new(settings);
        assert!(api.create_transaction(&purchase()).await.is_ok());
    }

    #[tokio::test]
    async fn read_with_server_error_is_api_error_not_data() {
        let settings = serve_once("500 Internal Server Error", "Internal Server Error\n").await;
        let api = HttpPortfolioApi::new(settings);
        match api.get_summary().await {
            Err(CoreError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn summary_is_parsed_from_successful_read() {
        let settings = serve_once("200 OK", r#"{"total_value": 1500.0, "num_positions": 1}"#).await;
        let api = HttpPortfolioApi::new(settings);
        let summary = api.get_summary().await.unwrap();
        assert_eq!(summary.total_value, Some(1500.0));
        assert_eq!(summary.position_count(), 1);
    }

    #[tokio::test]
    async fn stock_error_body_with_ok_status_is_a_lookup_failure() {
        let body = r#"{"error": "No data found", "ticker": "ZZZZ"}"#;
        let settings = serve_once("200 OK", body).await;
        let api = HttpPortfolioApi::new(settings);
        match api.get_stock_info("zzzz").await {
            Err(CoreError::StockLookup { ticker, message }) => {
                assert_eq!(ticker, "ZZZZ");
                assert_eq!(message, "No data found");
            }
            other => panic!("Expected StockLookup, got {:?}", other),
        }
    }
}

// Test helpers are intentionally partially used
#![allow(dead_code)]

use hello_metrics::create_router;
use reqwest::Client;
use tokio::net::TcpListener;

// ============================================================================
// Test Setup
// ============================================================================

/// A server on an ephemeral port with its own metrics registry.
pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // --

        // Enable debug logging only when requested
        if std::env::var("TEST_DEBUG").is_ok() {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        }

        let app = create_router().expect("Should be able to create router");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // The listener is already bound, so requests queue until serve runs
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    /// Fetch `/metrics` and return the body, asserting success.
    pub async fn scrape(&self) -> String {
        // ---
        let res = self
            .client
            .get(self.url("/metrics"))
            .send()
            .await
            .expect("Failed to scrape metrics");
        assert!(
            res.status().is_success(),
            "Metrics endpoint should return success"
        );
        res.text().await.expect("Failed to read metrics body")
    }
}

/// Value of the sample whose series (name plus label set) is exactly `series`.
pub fn sample_value(body: &str, series: &str) -> Option<f64> {
    // ---
    body.lines()
        .find_map(|line| line.strip_prefix(series)?.strip_prefix(' '))
        .and_then(|value| value.trim().parse().ok())
}

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

pub(crate) const GREETINGS_TOTAL: &str = "hello_worlds_total";
pub(crate) const HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";
pub(crate) const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Every instrument the service exposes, already registered with `registry`.
pub(crate) struct Instruments {
    pub registry: Registry,
    pub greetings: IntCounter,
    pub http_duration: HistogramVec,
    pub http_requests: IntCounterVec,
}

impl Instruments {
    /// Create the instruments and register each one exactly once.
    ///
    /// # Errors
    /// Fails if an instrument is malformed or a name is already taken in
    /// the registry. Callers treat this as a fatal startup error.
    pub fn register(registry: Registry) -> prometheus::Result<Self> {
        // ---
        let greetings = IntCounter::new(GREETINGS_TOTAL, "Hello Worlds requests.")?;

        let http_duration = HistogramVec::new(
            HistogramOpts::new(
                HTTP_REQUEST_DURATION,
                "Duration of HTTP requests in seconds.",
            ),
            &["method", "route", "code", "upgrade"],
        )?;

        let http_requests = IntCounterVec::new(
            Opts::new(
                HTTP_REQUESTS_TOTAL,
                "Total number of HTTP requests by status code and method.",
            ),
            &["code", "method"],
        )?;

        registry.register(Box::new(greetings.clone()))?;
        registry.register(Box::new(http_duration.clone()))?;
        registry.register(Box::new(http_requests.clone()))?;

        // Vectors without children are skipped by `gather()`; seed the
        // series `GET /` produces so both families are declared from startup.
        http_duration.with_label_values(&["GET", "/", "200", "false"]);
        http_requests.with_label_values(&["200", "GET"]);

        Ok(Self {
            registry,
            greetings,
            http_duration,
            http_requests,
        })
    }
}

use std::time::Duration;

/// Configuration knobs for [`lookup_with`](super::lookup_with).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    http_timeout_ms: u64,
    body_limit: usize,
    deadline_ms: Option<u64>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-request HTTP timeout. `0` falls back to
    /// [`FALLBACK_TIMEOUT`](crate::http::FALLBACK_TIMEOUT).
    pub fn with_http_timeout_ms(mut self, value: u64) -> Self {
        self.http_timeout_ms = value;
        self
    }

    /// Maximum number of body bytes read from each HTTP endpoint.
    pub fn with_body_limit(mut self, value: usize) -> Self {
        self.body_limit = value;
        self
    }

    /// Overall budget for one lookup. Probes still running when it expires
    /// are reported as cancelled.
    pub fn with_deadline_ms(mut self, value: Option<u64>) -> Self {
        self.deadline_ms = value;
        self
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            http_timeout_ms: 5_000,
            body_limit: 4096,
            deadline_ms: None,
        }
    }
}

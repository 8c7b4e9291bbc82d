use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::{FetchError, FetchUrl, FetchedBody};

enum Reply {
    Body(Result<FetchedBody, FetchError>),
    Hang,
}

/// In-memory fetcher for tests. Unknown URLs fail with a connection error;
/// every requested URL is recorded in order.
#[derive(Default)]
pub(crate) struct StubFetcher {
    replies: HashMap<String, Reply>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, url: &str, status: u16, body: &str) -> Self {
        let reply = FetchedBody {
            status,
            bytes: body.as_bytes().to_vec(),
        };
        self.replies.insert(url.to_string(), Reply::Body(Ok(reply)));
        self
    }

    pub(crate) fn with_error(mut self, url: &str, err: FetchError) -> Self {
        self.replies.insert(url.to_string(), Reply::Body(Err(err)));
        self
    }

    /// The request for `url` never completes.
    pub(crate) fn with_hang(mut self, url: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Hang);
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl FetchUrl for StubFetcher {
    async fn fetch(
        &self,
        url: &str,
        _timeout: Duration,
        limit: usize,
    ) -> Result<FetchedBody, FetchError> {
        if let Ok(mut urls) = self.requested.lock() {
            urls.push(url.to_string());
        }
        match self.replies.get(url) {
            Some(Reply::Body(Ok(body))) => {
                let mut body = body.clone();
                body.bytes.truncate(limit);
                Ok(body)
            }
            Some(Reply::Body(Err(err))) => Err(err.clone()),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(FetchError::Request(format!(
                "error sending request for url ({url})"
            ))),
        }
    }
}

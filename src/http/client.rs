use std::future::Future;
use std::time::Duration;

use super::FetchError;

/// Limit used when a caller asks for a zero timeout; also the client-wide
/// default.
pub const FALLBACK_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A zero `timeout` means [`FALLBACK_TIMEOUT`]; no request is unbounded.
fn effective_timeout(timeout: Duration) -> Duration {
    if timeout.is_zero() {
        FALLBACK_TIMEOUT
    } else {
        timeout
    }
}

/// Status and the first bytes of a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl FetchedBody {
    /// Non-2xx responses are treated as failed fetches.
    pub fn into_success(self) -> Result<Self, FetchError> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(FetchError::Status {
                status: self.status,
            })
        }
    }

    /// Body decoded leniently and lower-cased, as used for keyword matching.
    pub fn lowercase_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).to_lowercase()
    }
}

/// The HTTP capability consumed by the discovery probes.
pub trait FetchUrl {
    /// GET `url`, giving up after `timeout`, keeping at most `limit` body bytes.
    /// A zero `timeout` stands for [`FALLBACK_TIMEOUT`].
    fn fetch(
        &self,
        url: &str,
        timeout: Duration,
        limit: usize,
    ) -> impl Future<Output = Result<FetchedBody, FetchError>> + Send;
}

/// [`FetchUrl`] over a `reqwest` client with the platform's default TLS trust.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("mailhost-lookup/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(FALLBACK_TIMEOUT)
            .build()
            .map_err(|err| FetchError::ClientInit(err.to_string()))?;
        Ok(Self { client })
    }
}

impl FetchUrl for ReqwestFetcher {
    async fn fetch(
        &self,
        url: &str,
        timeout: Duration,
        limit: usize,
    ) -> Result<FetchedBody, FetchError> {
        let mut response = self
            .client
            .get(url)
            .timeout(effective_timeout(timeout))
            .send()
            .await?;
        let status = response.status().as_u16();

        let mut bytes = Vec::with_capacity(limit.min(8192));
        while bytes.len() < limit {
            let Some(chunk) = response.chunk().await? else {
                break;
            };
            let take = chunk.len().min(limit - bytes.len());
            bytes.extend_from_slice(&chunk[..take]);
        }

        Ok(FetchedBody { status, bytes })
    }
}

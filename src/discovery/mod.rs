//! Service-discovery probes: mail client autoconfig/autodiscover, SRV
//! records and WebFinger.
//!
//! None of these probes fails: every error becomes evidence that the
//! classifiers turn into an "unknown" or "no response" verdict.

mod autoconfig;
mod srv;
mod types;
mod webfinger;

pub use autoconfig::{autoconfig_urls, fetch_autoconfig, probe_autoconfig};
pub use srv::{SRV_SERVICES, fetch_srv, probe_srv};
pub use types::{HttpEvidence, SrvFinding};
pub use webfinger::{fetch_webfinger, probe_webfinger, webfinger_url};

use crate::http::{FetchError, FetchUrl};
use crate::lookup::LookupOptions;

async fn fetch_body<F: FetchUrl>(
    fetcher: &F,
    url: &str,
    options: &LookupOptions,
) -> Result<String, FetchError> {
    let body = fetcher
        .fetch(url, options.http_timeout(), options.body_limit())
        .await?
        .into_success()?;
    Ok(body.lowercase_text())
}

use tracing::debug;

use super::{HttpEvidence, fetch_body};
use crate::http::FetchUrl;
use crate::lookup::LookupOptions;
use crate::provider::classify_webfinger;
use crate::validator::Domain;

pub fn webfinger_url(domain: &Domain) -> String {
    format!("https://{domain}/.well-known/webfinger?resource=acct:user@{domain}")
}

pub async fn fetch_webfinger<F: FetchUrl>(
    fetcher: &F,
    domain: &Domain,
    options: &LookupOptions,
) -> HttpEvidence {
    let url = webfinger_url(domain);
    match fetch_body(fetcher, &url, options).await {
        Ok(body_snippet) => HttpEvidence::Response { url, body_snippet },
        Err(err) => {
            debug!(%url, error = %err, "WebFinger endpoint did not answer");
            HttpEvidence::Unavailable {
                reason: err.to_string(),
            }
        }
    }
}

/// Fetch and classify in one step; returns the verdict text.
pub async fn probe_webfinger<F: FetchUrl>(
    fetcher: &F,
    domain: &Domain,
    options: &LookupOptions,
) -> String {
    classify_webfinger(&fetch_webfinger(fetcher, domain, options).await).label
}

use tracing::debug;

use super::{HttpEvidence, fetch_body};
use crate::http::FetchUrl;
use crate::lookup::LookupOptions;
use crate::provider::classify_autoconfig;
use crate::validator::Domain;

/// Mozilla autoconfig (subdomain, then well-known path), then Microsoft
/// autodiscover. Tried in this order.
pub fn autoconfig_urls(domain: &Domain) -> [String; 3] {
    [
        format!("https://autoconfig.{domain}/mail/config-v1.1.xml"),
        format!("https://{domain}/.well-known/autoconfig/mail/config-v1.1.xml"),
        format!("https://autodiscover.{domain}/autodiscover/autodiscover.xml"),
    ]
}

/// Returns the first endpoint that answers; later endpoints are not tried
/// even when that body names no known provider.
pub async fn fetch_autoconfig<F: FetchUrl>(
    fetcher: &F,
    domain: &Domain,
    options: &LookupOptions,
) -> HttpEvidence {
    let mut failures = Vec::new();
    for url in autoconfig_urls(domain) {
        match fetch_body(fetcher, &url, options).await {
            Ok(body_snippet) => {
                debug!(%url, bytes = body_snippet.len(), "autoconfig endpoint answered");
                return HttpEvidence::Response { url, body_snippet };
            }
            Err(err) => {
                debug!(%url, error = %err, "autoconfig endpoint skipped");
                failures.push(format!("{url}: {err}"));
            }
        }
    }
    HttpEvidence::Unavailable {
        reason: failures.join("; "),
    }
}

/// Fetch and classify in one step; returns the verdict text.
pub async fn probe_autoconfig<F: FetchUrl>(
    fetcher: &F,
    domain: &Domain,
    options: &LookupOptions,
) -> String {
    classify_autoconfig(&fetch_autoconfig(fetcher, domain, options).await).label
}

//! Aggregator: runs every probe for one domain and assembles a
//! [`LookupReport`].
//!
//! Probes run concurrently. Only an MX resolution failure aborts the
//! lookup, as soon as it is known; every other probe reports its failure
//! as evidence. A
//! cancellation (token or deadline) yields a partial report in which the
//! unfinished probes are marked [`Evidence::Cancelled`].

mod error;
mod options;
mod types;

pub use error::LookupError;
pub use options::LookupOptions;
pub use types::{Evidence, LookupReport, SignalReport};

use std::collections::BTreeMap;
use std::future::Future;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::auth::{probe_txt_dmarc, probe_txt_spf};
use crate::discovery::{fetch_autoconfig, fetch_srv, fetch_webfinger};
use crate::dns::{LookupRecords, SystemResolver};
use crate::http::{FetchUrl, ReqwestFetcher};
use crate::mx::{self, probe_mx};
use crate::provider::{
    Signal, classify_autoconfig, classify_dmarc, classify_mx, classify_spf, classify_srv,
    classify_webfinger,
};
use crate::validator::Domain;

/// Lookup with the system resolver, default options and no cancellation.
pub async fn lookup(domain: &Domain) -> Result<LookupReport, LookupError> {
    lookup_with_options(domain, &LookupOptions::default(), &CancellationToken::new()).await
}

/// Lookup with the system resolver and a `reqwest` client.
pub async fn lookup_with_options(
    domain: &Domain,
    options: &LookupOptions,
    cancel: &CancellationToken,
) -> Result<LookupReport, LookupError> {
    let resolver = SystemResolver::from_system_conf().map_err(LookupError::resolver_init)?;
    let fetcher = ReqwestFetcher::new().map_err(LookupError::http_client_init)?;
    lookup_with(&resolver, &fetcher, domain, options, cancel).await
}

#[tracing::instrument(skip_all, fields(domain = %domain))]
pub async fn lookup_with<R, F>(
    resolver: &R,
    fetcher: &F,
    domain: &Domain,
    options: &LookupOptions,
    cancel: &CancellationToken,
) -> Result<LookupReport, LookupError>
where
    R: LookupRecords,
    F: FetchUrl,
{
    let deadline = options.deadline().map(|budget| Instant::now() + budget);

    // try_join! drops the other probes as soon as MX fails
    let (mx, spf, dmarc, autoconfig, srv, webfinger) = tokio::try_join!(
        async { guarded(cancel, deadline, probe_mx(resolver, domain)).await.transpose() },
        soft(guarded(cancel, deadline, probe_txt_spf(resolver, domain))),
        soft(guarded(cancel, deadline, probe_txt_dmarc(resolver, domain))),
        soft(guarded(cancel, deadline, fetch_autoconfig(fetcher, domain, options))),
        soft(guarded(cancel, deadline, fetch_srv(resolver, domain))),
        soft(guarded(cancel, deadline, fetch_webfinger(fetcher, domain, options))),
    )
    .inspect_err(|err| warn!(error = %err, "MX lookup failed, aborting"))?;

    let mut signals = BTreeMap::new();

    let mx = match mx {
        Some(hosts) => {
            let guess = classify_mx(&hosts);
            SignalReport::new(Evidence::Mx { hosts }, guess)
        }
        None => SignalReport::cancelled(Signal::Mx),
    };
    signals.insert(Signal::Mx, mx);

    signals.insert(
        Signal::Spf,
        settle(Signal::Spf, spf, |records| {
            let guess = classify_spf(&records);
            SignalReport::new(Evidence::Txt { records }, guess)
        }),
    );
    signals.insert(
        Signal::Dmarc,
        settle(Signal::Dmarc, dmarc, |records| {
            let guess = classify_dmarc(&records);
            SignalReport::new(Evidence::Txt { records }, guess)
        }),
    );
    signals.insert(
        Signal::Autoconfig,
        settle(Signal::Autoconfig, autoconfig, |evidence| {
            let guess = classify_autoconfig(&evidence);
            SignalReport::new(Evidence::Http(evidence), guess)
        }),
    );
    signals.insert(
        Signal::Srv,
        settle(Signal::Srv, srv, |entries| {
            let guess = classify_srv(&entries);
            SignalReport::new(Evidence::Srv { entries }, guess)
        }),
    );
    signals.insert(
        Signal::WebFinger,
        settle(Signal::WebFinger, webfinger, |evidence| {
            let guess = classify_webfinger(&evidence);
            SignalReport::new(Evidence::Http(evidence), guess)
        }),
    );

    let report = LookupReport::new(domain.clone(), signals);
    debug!(partial = report.is_partial(), "lookup assembled");
    Ok(report)
}

/// Runs `probe` unless the token fires or the deadline passes first.
async fn guarded<T>(
    cancel: &CancellationToken,
    deadline: Option<Instant>,
    probe: impl Future<Output = T>,
) -> Option<T> {
    let expired = async move {
        match deadline {
            Some(at) => tokio::time::sleep_until(at).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        _ = expired => None,
        value = probe => Some(value),
    }
}

/// Probes other than MX never fail the lookup.
async fn soft<T>(probe: impl Future<Output = T>) -> Result<T, mx::Error> {
    Ok(probe.await)
}

fn settle<T>(
    signal: Signal,
    outcome: Option<T>,
    build: impl FnOnce(T) -> SignalReport,
) -> SignalReport {
    match outcome {
        Some(value) => build(value),
        None => {
            debug!(%signal, "probe cancelled");
            SignalReport::cancelled(signal)
        }
    }
}

#[cfg(test)]
mod tests;

use tracing::debug;

use super::Error;
use crate::dns::LookupRecords;
use crate::validator::Domain;

/// Lookup MX hosts for `domain`.
///
/// Host names lose their trailing root dot and come back sorted
/// lexicographically (not by preference). Case is preserved.
pub async fn probe_mx<R: LookupRecords>(resolver: &R, domain: &Domain) -> Result<Vec<String>, Error> {
    let exchanges = resolver
        .lookup_mx(domain.as_str())
        .await
        .map_err(|source| Error::lookup(domain.as_str(), source))?;

    let mut hosts: Vec<String> = exchanges
        .iter()
        .map(|exchange| normalize_exchange(exchange))
        .collect();
    hosts.sort();

    debug!(%domain, count = hosts.len(), "MX lookup done");
    Ok(hosts)
}

pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim_end_matches('.').to_string()
}

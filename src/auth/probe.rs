use tracing::warn;

use crate::dns::LookupRecords;
use crate::validator::Domain;

const SPF_PREFIX: &str = "v=spf1";

pub(crate) fn fqdn(label: &str, domain: &str) -> String {
    let trimmed = label.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        domain.to_string()
    } else {
        format!("{}.{}", trimmed.to_ascii_lowercase(), domain)
    }
}

/// TXT records of `domain` that start with the literal `v=spf1`.
///
/// A lookup failure is returned as a single `Error: <cause>` entry.
pub async fn probe_txt_spf<R: LookupRecords>(resolver: &R, domain: &Domain) -> Vec<String> {
    match resolver.lookup_txt(domain.as_str()).await {
        Ok(records) => records
            .into_iter()
            .filter(|record| record.starts_with(SPF_PREFIX))
            .collect(),
        Err(err) => {
            warn!(%domain, error = %err, "SPF TXT lookup failed");
            vec![format!("Error: {err}")]
        }
    }
}

/// Every TXT record under `_dmarc.<domain>`, unfiltered.
///
/// A lookup failure is returned as a single `Error: <cause>` entry.
pub async fn probe_txt_dmarc<R: LookupRecords>(resolver: &R, domain: &Domain) -> Vec<String> {
    let name = fqdn("_dmarc", domain.as_str());
    match resolver.lookup_txt(&name).await {
        Ok(records) => records,
        Err(err) => {
            warn!(%name, error = %err, "DMARC TXT lookup failed");
            vec![format!("Error: {err}")]
        }
    }
}

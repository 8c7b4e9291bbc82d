use tracing::debug;

use super::SrvFinding;
use crate::dns::LookupRecords;
use crate::provider::classify_srv;
use crate::validator::Domain;

pub const SRV_SERVICES: [&str; 3] = ["_autodiscover._tcp", "_imaps._tcp", "_submission._tcp"];

/// Queries every mail-related service name; a name that fails to resolve
/// is skipped. Findings keep service order, then answer order.
pub async fn fetch_srv<R: LookupRecords>(resolver: &R, domain: &Domain) -> Vec<SrvFinding> {
    let names = SRV_SERVICES.map(|service| format!("{service}.{domain}"));
    let (autodiscover, imaps, submission) = tokio::join!(
        resolver.lookup_srv(&names[0]),
        resolver.lookup_srv(&names[1]),
        resolver.lookup_srv(&names[2]),
    );

    let mut findings = Vec::new();
    for (name, answer) in names.iter().zip([autodiscover, imaps, submission]) {
        match answer {
            Ok(targets) => {
                findings.extend(
                    targets
                        .iter()
                        .filter_map(|target| normalize_target(target))
                        .map(|target| SrvFinding::new(name.as_str(), target)),
                );
            }
            Err(err) => debug!(%name, error = %err, "SRV lookup skipped"),
        }
    }
    findings
}

/// Fetch and classify in one step; returns the verdict text.
pub async fn probe_srv<R: LookupRecords>(resolver: &R, domain: &Domain) -> String {
    classify_srv(&fetch_srv(resolver, domain).await).label
}

// "." = service explicitement indisponible (RFC 2782)
pub(crate) fn normalize_target(target: &str) -> Option<String> {
    let trimmed = target.trim_end_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_lowercase())
    }
}

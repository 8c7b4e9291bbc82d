use thiserror::Error;

use crate::dns::DnsError;

/// MX resolution failure. Unlike the other probes this one is fatal to a
/// lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MxError {
    #[error("Failed to resolve MX records for {domain}: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: DnsError,
    },
}

impl MxError {
    pub(crate) fn lookup(domain: impl Into<String>, source: DnsError) -> Self {
        Self::Lookup {
            domain: domain.into(),
            source,
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            Self::Lookup { domain, .. } => domain,
        }
    }
}

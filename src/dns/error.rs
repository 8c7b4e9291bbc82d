use std::fmt;

use thiserror::Error;
use trust_dns_resolver::{
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsErrorKind {
    NxDomain,
    Timeout,
    ServFail,
    Other,
}

impl fmt::Display for DnsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NxDomain => "NXDOMAIN",
            Self::Timeout => "timeout",
            Self::ServFail => "SERVFAIL",
            Self::Other => "error",
        };
        f.write_str(label)
    }
}

/// Failure of a single DNS query, independent of the resolver library.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DnsError {
    pub kind: DnsErrorKind,
    pub message: String,
}

impl DnsError {
    pub fn new(kind: DnsErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn txt_data_utf8(name: &str, source: std::str::Utf8Error) -> Self {
        Self::new(
            DnsErrorKind::Other,
            format!("TXT record {name} contains invalid UTF-8 data: {source}"),
        )
    }
}

impl From<ResolveError> for DnsError {
    fn from(err: ResolveError) -> Self {
        let kind = match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
                ResponseCode::NXDomain => DnsErrorKind::NxDomain,
                ResponseCode::ServFail => DnsErrorKind::ServFail,
                _ => DnsErrorKind::Other,
            },
            ResolveErrorKind::Timeout => DnsErrorKind::Timeout,
            _ => DnsErrorKind::Other,
        };
        Self::new(kind, err.to_string())
    }
}

use thiserror::Error;

use crate::dns::DnsError;
use crate::http::FetchError;
use crate::mx;

/// Errors that abort a whole lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Mx(#[from] mx::Error),
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: DnsError,
    },
    #[error("HTTP client initialization failed: {source}")]
    HttpClientInit {
        #[source]
        source: FetchError,
    },
}

impl LookupError {
    pub(crate) fn resolver_init(source: DnsError) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn http_client_init(source: FetchError) -> Self {
        Self::HttpClientInit { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::DnsErrorKind;

    #[test]
    fn init_failures_name_the_component() {
        let dns = LookupError::resolver_init(DnsError::new(
            DnsErrorKind::Other,
            "no nameservers in /etc/resolv.conf",
        ));
        assert_eq!(
            dns.to_string(),
            "resolver initialization failed: no nameservers in /etc/resolv.conf"
        );

        let http = LookupError::http_client_init(FetchError::ClientInit(
            "TLS backend unavailable".to_string(),
        ));
        assert_eq!(
            http.to_string(),
            "HTTP client initialization failed: TLS backend unavailable"
        );
    }
}

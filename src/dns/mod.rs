//! DNS capability shared by the MX, TXT and SRV probes.
//!
//! Probes are generic over [`LookupRecords`]; [`SystemResolver`] is the
//! production implementation on top of `trust-dns-resolver`.

mod error;
mod resolver;

pub use error::{DnsError, DnsErrorKind};
pub use resolver::{LookupRecords, SystemResolver};

#[cfg(test)]
pub(crate) mod stub;

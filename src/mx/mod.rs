//! MX probe.
//!
//! The public entry point is [`probe_mx`], which resolves the domain's mail
//! exchangers through any [`LookupRecords`](crate::dns::LookupRecords)
//! implementation.

mod error;
mod probe;

pub use error::MxError as Error;
pub use probe::probe_mx;

//! SPF and DMARC TXT probes. These never fail: a lookup error becomes an
//! `Error: ...` record that classifies as unknown.

mod probe;

pub use probe::{probe_txt_dmarc, probe_txt_spf};

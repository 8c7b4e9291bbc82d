//! Provider knowledge table and the classifiers that map probe evidence to
//! a [`ProviderGuess`].
//!
//! Every classifier is a pure function. Empty or error evidence always
//! yields an "unknown" guess. MX, SPF and DMARC matching is case-sensitive;
//! autoconfig and WebFinger bodies are lower-cased by their probes and SRV
//! targets are lower-cased on discovery.

mod classify;
mod table;
mod types;

pub use classify::{
    classify_autoconfig, classify_dmarc, classify_mx, classify_spf, classify_srv,
    classify_webfinger,
};
pub use table::{PROVIDERS, ProviderEntry, entry, match_provider, priority};
pub use types::{Provider, ProviderGuess, Signal};

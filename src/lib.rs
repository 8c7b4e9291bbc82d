#![forbid(unsafe_code)]
//! mailhost_lookup — devine l'hébergeur mail d'un domaine (MX, SPF, DMARC,
//! autoconfig, SRV, WebFinger)

pub mod auth;
pub mod discovery;
pub mod dns;
pub mod http;
pub mod lookup;
pub mod mx;
pub mod provider;
pub mod validator;

pub use lookup::{
    Evidence, LookupError, LookupOptions, LookupReport, SignalReport, lookup, lookup_with,
    lookup_with_options,
};
pub use mx::{Error as MxError, probe_mx};
pub use provider::{Provider, ProviderGuess, Signal};
pub use validator::{
    Domain,
    InputMode,
    ValidationError,
    validate_and_extract_domain, // << point d'entrée
    validate_with_mode,
};

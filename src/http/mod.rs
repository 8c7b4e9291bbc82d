//! HTTP capability used by the autoconfig and WebFinger probes.

mod client;
mod error;

pub use client::{FALLBACK_TIMEOUT, FetchUrl, FetchedBody, ReqwestFetcher};
pub use error::FetchError;

#[cfg(test)]
pub(crate) mod stub;

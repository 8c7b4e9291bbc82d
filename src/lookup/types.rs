use std::collections::BTreeMap;

use crate::discovery::{HttpEvidence, SrvFinding};
use crate::provider::{ProviderGuess, Signal};
use crate::validator::Domain;

/// Raw result of one probe.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Mx { hosts: Vec<String> },
    /// SPF and DMARC.
    Txt { records: Vec<String> },
    /// Autoconfig and WebFinger.
    Http(HttpEvidence),
    Srv { entries: Vec<SrvFinding> },
    /// The probe was still running when the lookup was cancelled.
    Cancelled,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalReport {
    pub evidence: Evidence,
    pub guess: ProviderGuess,
}

impl SignalReport {
    pub(crate) fn new(evidence: Evidence, guess: ProviderGuess) -> Self {
        Self { evidence, guess }
    }

    pub(crate) fn cancelled(signal: Signal) -> Self {
        Self::new(Evidence::Cancelled, ProviderGuess::cancelled(signal))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.evidence, Evidence::Cancelled)
    }
}

/// Everything one lookup found, keyed by signal.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupReport {
    domain: Domain,
    signals: BTreeMap<Signal, SignalReport>,
}

impl LookupReport {
    pub(crate) fn new(domain: Domain, signals: BTreeMap<Signal, SignalReport>) -> Self {
        Self { domain, signals }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn get(&self, signal: Signal) -> Option<&SignalReport> {
        self.signals.get(&signal)
    }

    pub fn guess(&self, signal: Signal) -> Option<&ProviderGuess> {
        self.get(signal).map(|report| &report.guess)
    }

    /// Signals in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Signal, &SignalReport)> {
        self.signals.iter().map(|(signal, report)| (*signal, report))
    }

    /// True when at least one probe was cut short by cancellation.
    pub fn is_partial(&self) -> bool {
        self.signals.values().any(SignalReport::is_cancelled)
    }
}

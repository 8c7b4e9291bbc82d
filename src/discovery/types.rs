use std::fmt;

/// What an HTTP discovery probe observed.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpEvidence {
    /// First endpoint that answered, with its lower-cased body prefix.
    Response { url: String, body_snippet: String },
    /// No endpoint answered.
    Unavailable { reason: String },
}

/// One SRV target, tied to the service name it was found under.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvFinding {
    pub service: String,
    pub target: String,
}

impl SrvFinding {
    pub fn new(service: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for SrvFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.service, self.target)
    }
}

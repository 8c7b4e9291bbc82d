use std::fmt;

use thiserror::Error;

/// How the raw user input is interpreted.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// `user@domain` or a bare domain, decided by the presence of `@`.
    #[default]
    Auto,
    /// Input must be an e-mail address.
    Email,
}

/// A syntactically checked domain, stored in its ASCII (IDNA) form.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    pub(crate) fn new_unchecked(ascii: String) -> Self {
        Self(ascii)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email address: {input}")]
    InvalidEmail { input: String },
    #[error("Invalid domain format: {input} ({reason})")]
    InvalidDomain { input: String, reason: String },
}

impl ValidationError {
    pub(crate) fn email(input: &str) -> Self {
        Self::InvalidEmail {
            input: input.to_string(),
        }
    }

    pub(crate) fn domain(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

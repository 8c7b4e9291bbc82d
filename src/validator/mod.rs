//! Input validation: turns an e-mail address or a bare domain into a
//! [`Domain`] before any probe runs. Purely syntactic.

mod domain;
mod types;

pub use types::{Domain, InputMode, ValidationError};

use domain::parse_domain;

/// Accepts `user@domain` or a bare domain and returns the domain to probe.
pub fn validate_and_extract_domain(input: &str) -> Result<Domain, ValidationError> {
    validate_with_mode(input, InputMode::Auto)
}

pub fn validate_with_mode(input: &str, mode: InputMode) -> Result<Domain, ValidationError> {
    let trimmed = input.trim();

    if mode == InputMode::Email || trimmed.contains('@') {
        if trimmed.starts_with('@') || trimmed.ends_with('@') {
            return Err(ValidationError::email(trimmed));
        }
        // le domaine est tout ce qui suit le dernier '@'
        let Some((_, domain)) = trimmed.rsplit_once('@') else {
            return Err(ValidationError::email(trimmed));
        };
        return parse_domain(domain);
    }

    parse_domain(trimmed)
}

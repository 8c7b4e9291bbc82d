use super::{Domain, ValidationError};

/// Valide le domaine: forme générale, conversion IDNA puis checks de labels.
/// Aucun appel DNS.
pub(crate) fn parse_domain(input: &str) -> Result<Domain, ValidationError> {
    if !input.contains('.') {
        return Err(ValidationError::domain(input, "must contain at least one dot"));
    }
    if input.starts_with('.') || input.ends_with('.') {
        return Err(ValidationError::domain(
            input,
            "cannot start or end with a dot",
        ));
    }

    let ascii = idna::domain_to_ascii(input)
        .map_err(|_| ValidationError::domain(input, "punycode conversion failed"))?;

    if ascii.is_empty() {
        return Err(ValidationError::domain(input, "empty after IDNA conversion"));
    }
    if ascii.len() > 253 {
        return Err(ValidationError::domain(
            input,
            format!("length {} > 253", ascii.len()),
        ));
    }

    for label in ascii.split('.') {
        check_label(input, label)?;
    }

    Ok(Domain::new_unchecked(ascii))
}

fn check_label(input: &str, label: &str) -> Result<(), ValidationError> {
    if label.is_empty() {
        return Err(ValidationError::domain(input, "empty domain label"));
    }
    if label.len() > 63 {
        return Err(ValidationError::domain(
            input,
            format!("label '{}' length {} > 63", label, label.len()),
        ));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::domain(
            input,
            format!("label '{}' cannot start/end with '-'", label),
        ));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::domain(
            input,
            format!("label '{}' has invalid chars", label),
        ));
    }
    Ok(())
}

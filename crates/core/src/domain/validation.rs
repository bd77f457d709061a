// Form-required checks shared by records and board forms

use super::error::{DomainError, Result};

/// Maximum length of short text columns
pub const MAX_TEXT_LEN: usize = 255;

/// Trim a required text field; blank input is rejected.
pub fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid(field, "This field may not be blank."));
    }
    Ok(trimmed.to_string())
}

/// Required text bounded by `MAX_TEXT_LEN` characters
pub fn required_short(field: &'static str, value: &str) -> Result<String> {
    let text = required(field, value)?;
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::invalid(
            field,
            format!("Ensure this field has no more than {} characters.", MAX_TEXT_LEN),
        ));
    }
    Ok(text)
}

/// Inclusive numeric range check for form number inputs
pub fn in_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(DomainError::invalid(
            field,
            format!("must be between {} and {} (got {})", min, max, value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("title", "  Prep  ").unwrap(), "Prep");
        assert!(required("title", "   ").is_err());
    }

    #[test]
    fn test_required_short_length() {
        assert!(required_short("title", &"a".repeat(255)).is_ok());
        let err = required_short("title", &"a".repeat(256)).unwrap_err();
        assert!(err.to_string().contains("255"));
    }

    #[test]
    fn test_in_range() {
        assert_eq!(in_range("guests", 4, 1, 20).unwrap(), 4);
        assert!(in_range("guests", 21, 1, 20).is_err());
        assert!(in_range("guests", 0, 1, 20).is_err());
    }
}

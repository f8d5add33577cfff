//! Input validation functions
//!
//! Shape checks applied before any side effect; the backend maps
//! failures to 400 responses with the offending field named.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate display name
pub fn validate_display_name(display_name: &str) -> Result<(), String> {
    if display_name.trim().is_empty() {
        return Err("Display name cannot be empty".to_string());
    }
    if display_name.len() > 100 {
        return Err("Display name too long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@x.com")]
    #[case("trader.one@example.co.uk")]
    #[case("UPPER@EXAMPLE.COM")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("missing@tld")]
    #[case("spaces in@example.com")]
    #[case("@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("password123").is_ok());
    }

    #[test]
    fn test_password_maximum_length() {
        let long = "a".repeat(129);
        assert!(validate_password(&long).is_err());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_display_names_rejected(#[case] name: &str) {
        assert!(validate_display_name(name).is_err());
    }

    #[test]
    fn test_display_name_accepted() {
        assert!(validate_display_name("Ann").is_ok());
    }
}

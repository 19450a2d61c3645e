//! Input validation utilities
//!
//! Client-side guards that run before any network call. They mirror the
//! API's authoritative checks as a convenience; the server still enforces
//! every rule.

use regex::Regex;
use std::sync::OnceLock;

/// Maximum note content length in characters
pub const NOTE_CONTENT_MAX: usize = 5000;

/// Validate an institutional email address
///
/// Only `@unc.edu`, `@live.unc.edu`, and `@ad.unc.edu` addresses are
/// accepted, case-insensitively. Anything else is rejected here, before a
/// request is issued.
pub fn validate_unc_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    static UNC_EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = UNC_EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@(unc\.edu|live\.unc\.edu|ad\.unc\.edu)$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(&email.to_lowercase()) {
        return Err(
            "Please use a valid UNC email address (@unc.edu, @live.unc.edu, or @ad.unc.edu)"
                .to_string(),
        );
    }

    Ok(())
}

/// Validate a registration password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 100 {
        return Err("Password too long (max 100 characters)".to_string());
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err("Password must contain at least one letter and one number".to_string());
    }

    Ok(())
}

/// Validate a graduation year against the current year
pub fn validate_grad_year(grad_year: i32, current_year: i32) -> Result<(), String> {
    if grad_year < current_year || grad_year > current_year + 10 {
        return Err(format!(
            "Graduation year must be between {} and {}",
            current_year,
            current_year + 10
        ));
    }
    Ok(())
}

/// Require a non-empty field, the `required` attribute analog
pub fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

/// Validate a class difficulty rating (1-10)
pub fn validate_difficulty_rating(rating: u8) -> Result<(), String> {
    if !(1..=10).contains(&rating) {
        return Err("Difficulty rating must be between 1 and 10".to_string());
    }
    Ok(())
}

/// Validate a professor rating (1.0-5.0)
pub fn validate_professor_rating(rating: f64) -> Result<(), String> {
    if !(1.0..=5.0).contains(&rating) {
        return Err("Rating must be between 1.0 and 5.0".to_string());
    }
    Ok(())
}

/// Validate a new note before submission
///
/// Title and content are required; content is capped at
/// [`NOTE_CONTENT_MAX`] characters.
pub fn validate_note(title: &str, content: &str) -> Result<(), String> {
    if content.chars().count() > NOTE_CONTENT_MAX {
        return Err(format!(
            "Note content too long (max {} characters)",
            NOTE_CONTENT_MAX
        ));
    }

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err("Title and content are required".to_string());
    }

    if title.chars().count() > 100 {
        return Err("Note title too long (max 100 characters)".to_string());
    }

    Ok(())
}

/// Normalize a comma-separated tag string into a list of tags
///
/// Entries are trimmed, empties dropped, and duplicates dropped while
/// keeping first-seen order.
pub fn normalize_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_institutional_domains() {
        assert!(validate_unc_email("student@unc.edu").is_ok());
        assert!(validate_unc_email("first.last@live.unc.edu").is_ok());
        assert!(validate_unc_email("tar_heel+notes@ad.unc.edu").is_ok());
        // Case-insensitive
        assert!(validate_unc_email("Student@UNC.EDU").is_ok());
    }

    #[test]
    fn test_rejects_other_domains() {
        assert!(validate_unc_email("student@gmail.com").is_err());
        assert!(validate_unc_email("student@duke.edu").is_err());
        // Subdomains and suffix tricks are not on the allow-list
        assert!(validate_unc_email("student@cs.unc.edu").is_err());
        assert!(validate_unc_email("student@unc.edu.evil.com").is_err());
        assert!(validate_unc_email("").is_err());
        assert!(validate_unc_email("not-an-email").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("passw0rd").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("lettersonly").is_err());
        assert!(validate_password("12345678").is_err());
        assert!(validate_password(&"a1".repeat(51)).is_err());
    }

    #[test]
    fn test_grad_year_window() {
        assert!(validate_grad_year(2026, 2026).is_ok());
        assert!(validate_grad_year(2036, 2026).is_ok());
        assert!(validate_grad_year(2025, 2026).is_err());
        assert!(validate_grad_year(2037, 2026).is_err());
    }

    #[test]
    fn test_rating_ranges() {
        assert!(validate_difficulty_rating(1).is_ok());
        assert!(validate_difficulty_rating(10).is_ok());
        assert!(validate_difficulty_rating(0).is_err());
        assert!(validate_difficulty_rating(11).is_err());

        assert!(validate_professor_rating(1.0).is_ok());
        assert!(validate_professor_rating(5.0).is_ok());
        assert!(validate_professor_rating(0.9).is_err());
        assert!(validate_professor_rating(5.1).is_err());
    }

    #[test]
    fn test_note_content_cap() {
        let max = "x".repeat(NOTE_CONTENT_MAX);
        assert!(validate_note("title", &max).is_ok());

        let over = "x".repeat(NOTE_CONTENT_MAX + 1);
        assert_eq!(
            validate_note("title", &over),
            Err("Note content too long (max 5000 characters)".to_string())
        );
    }

    #[test]
    fn test_note_required_fields() {
        assert!(validate_note("", "content").is_err());
        assert!(validate_note("title", "   ").is_err());
        assert!(validate_note("title", "content").is_ok());
    }

    #[test]
    fn test_tag_normalization() {
        assert_eq!(normalize_tags("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(normalize_tags(" , ,"), Vec::<String>::new());
        assert_eq!(normalize_tags("exam, exam, review"), vec!["exam", "review"]);
        assert_eq!(normalize_tags(""), Vec::<String>::new());
    }
}

//! Password strength policy.
//!
//! A pure predicate with no side effects. Every path that sets a
//! credential goes through this module, so a password accepted at
//! registration is exactly the set accepted anywhere else.

/// The accepted special characters.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()";

/// Minimum password length in bytes.
pub const MIN_LENGTH: usize = 8;

/// Returns the first violated rule as a human-readable message, or
/// `None` when the candidate satisfies the policy.
pub fn violation(candidate: &str) -> Option<&'static str> {
    if candidate.len() < MIN_LENGTH {
        return Some("Password must be at least 8 characters");
    }

    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }

    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }

    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one digit");
    }

    if !candidate.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some("Password must contain at least one special character (!@#$%^&*())");
    }

    None
}

/// True iff the candidate satisfies every policy rule.
pub fn is_acceptable(candidate: &str) -> bool {
    violation(candidate).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_acceptable_password() {
        // 8 chars, one of each required class
        assert!(is_acceptable("Abcdef1!"));
    }

    #[test]
    fn test_missing_uppercase_and_special() {
        assert!(!is_acceptable("abcdefg1"));
        assert_eq!(
            violation("abcdefg1"),
            Some("Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_too_short() {
        assert!(!is_acceptable("Ab1!"));
        assert_eq!(
            violation("Ab1!"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_missing_lowercase() {
        assert!(!is_acceptable("ABCDEF1!"));
    }

    #[test]
    fn test_missing_digit() {
        assert!(!is_acceptable("Abcdefg!"));
    }

    #[test]
    fn test_missing_special() {
        assert!(!is_acceptable("Abcdefg1"));
    }

    #[test]
    fn test_special_set_is_fixed() {
        // Underscore and dash are not in the accepted set
        assert!(!is_acceptable("Abcdef1_"));
        assert!(!is_acceptable("Abcdef1-"));
        assert!(is_acceptable("Abcdef1)"));
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert!(is_acceptable("Abcdef1!"));
            assert!(!is_acceptable("abcdefg1"));
        }
    }
}

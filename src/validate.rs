//! Form Validation
//!
//! Signup uses the strict address pattern; signin deliberately keeps its
//! looser contains-`@`-and-`.` check. The two are specified independently
//! and must stay that way.

use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

// ========================
// Signup (strict)
// ========================

pub fn signup_email(email: &str) -> bool {
    email_re().is_match(email)
}

pub fn signup_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Per-field message; empty string = valid. An untyped field shows no error.
pub fn signup_email_error(email: &str) -> &'static str {
    if email.is_empty() || signup_email(email) {
        ""
    } else {
        "Email is not in correct format"
    }
}

pub fn signup_password_error(password: &str) -> &'static str {
    if password.is_empty() || signup_password(password) {
        ""
    } else {
        "Password must be at least 6 characters"
    }
}

/// Gates the signup submit button
pub fn signup_form_valid(email: &str, password: &str) -> bool {
    signup_email(email) && signup_password(password)
}

// ========================
// Signin (loose)
// ========================

pub fn signin_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Gates the signin submit button
pub fn signin_form_valid(email: &str, password: &str) -> bool {
    signin_email(email) && !password.is_empty()
}

// ========================
// Create Input
// ========================

/// Title to send for a create, or `None` for blank input. The raw text is
/// kept verbatim; only the blank check trims.
pub fn create_title(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_accepts_standard_address() {
        assert!(signup_email("a@b.com"));
        assert!(signup_form_valid("a@b.com", "secret1"));
    }

    #[test]
    fn test_signup_rejects_malformed_addresses() {
        assert!(!signup_email("a@b"));
        assert!(!signup_email("a b@c.com"));
        assert!(!signup_email("@b.com"));
        assert!(!signup_email("a@.com"));
        assert!(!signup_email(""));
    }

    #[test]
    fn test_signup_password_length() {
        assert!(!signup_password("12345"));
        assert!(signup_password("123456"));
        assert!(signup_password("secret1"));
    }

    #[test]
    fn test_signup_messages_only_for_typed_invalid_input() {
        assert_eq!(signup_email_error(""), "");
        assert_eq!(signup_email_error("a@b.com"), "");
        assert_eq!(signup_email_error("a@b"), "Email is not in correct format");
        assert_eq!(signup_password_error(""), "");
        assert_eq!(
            signup_password_error("12345"),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_signup_submit_gate() {
        assert!(!signup_form_valid("a@b", "secret1"));
        assert!(!signup_form_valid("a@b.com", "12345"));
        assert!(signup_form_valid("a@b.com", "secret1"));
    }

    #[test]
    fn test_signin_is_looser_than_signup() {
        // "a@b." fails the strict pattern but satisfies the signin check.
        assert!(signin_email("a@b."));
        assert!(!signup_email("a@b."));
    }

    #[test]
    fn test_signin_submit_gate() {
        assert!(!signin_form_valid("ab.com", "pw"));
        assert!(!signin_form_valid("a@bcom", "pw"));
        assert!(!signin_form_valid("a@b.com", ""));
        assert!(signin_form_valid("a@b.com", "pw"));
    }

    #[test]
    fn test_create_title_blank_input() {
        assert_eq!(create_title(""), None);
        assert_eq!(create_title("   "), None);
        assert_eq!(create_title("\t \n"), None);
    }

    #[test]
    fn test_create_title_keeps_raw_text() {
        assert_eq!(create_title(" buy milk "), Some(" buy milk "));
    }
}

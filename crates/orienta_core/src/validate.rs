//! Pure input validation helpers.
//!
//! # Responsibility
//! - Validate email format and password strength for account forms.
//!
//! # Invariants
//! - No I/O; results depend only on the input string.
//! - Rejections always carry a human-readable reason.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

const MIN_PASSWORD_CHARS: usize = 8;

/// Validity flag plus reason, as consumed by form views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub ok: bool,
    /// Present exactly when `ok` is false.
    pub reason: Option<String>,
}

impl Validation {
    fn pass() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

/// Checks that `email` looks like a deliverable address.
pub fn validate_email(email: &str) -> Validation {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Validation::fail("email must not be empty");
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Validation::fail(format!("`{trimmed}` is not a valid email address"));
    }
    Validation::pass()
}

/// Checks minimum password strength: length, case mix and a digit.
pub fn validate_password(password: &str) -> Validation {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Validation::fail(format!(
            "password must be at least {MIN_PASSWORD_CHARS} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Validation::fail("password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Validation::fail("password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Validation::fail("password must contain a digit");
    }
    Validation::pass()
}

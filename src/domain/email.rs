//! Email address syntax.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern is a valid regex")
});

const MAX_LOCAL_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 254;

/// Whether `email` is a syntactically valid address.
///
/// # Rules
///
/// - Dot-separated atoms before a single '@', no empty atoms
/// - Local part at most 64 characters, whole address at most 254
/// - Domain of dot-separated labels ending in an alphabetic TLD
///
/// ```
/// use contact_book::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@domain"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }

    match email.split_once('@') {
        Some((local, _)) if local.len() > MAX_LOCAL_LEN => false,
        Some(_) => EMAIL_PATTERN.is_match(email),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validates_format() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user..name@example.com"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(is_valid_email("fajri@gmail.com"));
    }

    #[test]
    fn test_email_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&long_local));

        let long_domain = format!("user@{}.com", "a".repeat(250));
        assert!(!is_valid_email(&long_domain));
    }
}

//! Local syntax check for email addresses. No network access.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EmailCheckError, EmailCheckResult};
use crate::models::EmailFormatResult;

/// RFC 5321 ceiling on the total address length, in characters
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Split on the first `@`. Everything after it, further `@`s included, is the domain.
pub fn split_address(email: &str) -> Option<(&str, &str)> {
    email.split_once('@')
}

/// Inspect an address without touching the network.
///
/// Fails only for the empty string. Length, pattern and domain checks are
/// reported independently of each other.
pub fn check_format(email: &str) -> EmailCheckResult<EmailFormatResult> {
    if email.is_empty() {
        return Err(EmailCheckError::InvalidArgument(
            "Email is required".to_string(),
        ));
    }

    let (local_part, domain) = match split_address(email) {
        Some((local, domain)) => (Some(local.to_string()), Some(domain.to_string())),
        None => (None, None),
    };
    let valid_domain = domain.as_deref().map(|d| d.contains('.'));

    Ok(EmailFormatResult {
        email: email.to_string(),
        valid_length: email.chars().count() <= MAX_EMAIL_LENGTH,
        valid_format: EMAIL_PATTERN.is_match(email),
        local_part,
        domain,
        valid_domain,
    })
}

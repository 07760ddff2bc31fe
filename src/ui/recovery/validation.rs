// SPDX-License-Identifier: MPL-2.0
//! Client-side validation for the wallet recovery form.
//!
//! These checks are syntactic only; the backend remains the authority on
//! whether the key actually matches the account.

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Accepted private key length range. The check is length-only; the
/// backend decides whether the key actually decodes.
pub const KEY_LEN_MIN: usize = 64;
pub const KEY_LEN_MAX: usize = 66;

pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Enter the email on the account");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => None,
        _ => Some("This doesn't look like an email address"),
    }
}

pub fn validate_private_key(key: &str) -> Option<&'static str> {
    let key = key.trim();
    if key.is_empty() {
        return Some("Enter your wallet private key");
    }
    let len = key.chars().count();
    if !(KEY_LEN_MIN..=KEY_LEN_MAX).contains(&len) {
        return Some("A private key is between 64 and 66 characters");
    }
    None
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        Some("Password must be at least 4 characters")
    } else {
        None
    }
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if password != confirmation {
        Some("Passwords do not match")
    } else {
        None
    }
}

/// Per-field error state for one validation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<&'static str>,
    pub private_key: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirmation: Option<&'static str>,
}

impl FormErrors {
    pub fn is_clean(&self) -> bool {
        self.email.is_none()
            && self.private_key.is_none()
            && self.password.is_none()
            && self.confirmation.is_none()
    }
}

/// Validate the whole form at once.
pub fn validate_form(
    email: &str,
    private_key: &str,
    password: &str,
    confirmation: &str,
) -> FormErrors {
    FormErrors {
        email: validate_email(email),
        private_key: validate_private_key(private_key),
        password: validate_password(password),
        confirmation: validate_confirmation(password, confirmation),
    }
}

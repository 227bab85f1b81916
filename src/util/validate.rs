//! Form constraint checks for the login and signup forms.
//!
//! Mirrors the browser's native constraint validation for `required` and
//! `type="email"` inputs so flows can reject input before any request is made.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{LoginRequest, SignupRequest};

/// Why a form submission was rejected locally.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("email is not a valid address")]
    EmailInvalid,
    #[error("password is required")]
    PasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Live state of the signup confirmation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Nothing typed yet; show no feedback.
    Empty,
    Match,
    Mismatch,
}

impl PasswordMatch {
    /// CSS class for the confirmation input, if any.
    #[must_use]
    pub fn input_class(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Match => "is-valid",
            Self::Mismatch => "is-invalid",
        }
    }

    /// Message for `setCustomValidity` on the confirmation input. Empty
    /// clears the custom error.
    #[must_use]
    pub fn custom_validity(self) -> String {
        match self {
            Self::Mismatch => FieldError::PasswordMismatch.to_string(),
            Self::Empty | Self::Match => String::new(),
        }
    }
}

/// Classify the confirmation field against the password.
#[must_use]
pub fn password_match(password: &str, confirm: &str) -> PasswordMatch {
    if confirm.is_empty() {
        PasswordMatch::Empty
    } else if password == confirm {
        PasswordMatch::Match
    } else {
        PasswordMatch::Mismatch
    }
}

/// Validate an `<input type="email">` value the way browsers do.
///
/// The local part allows the HTML "valid e-mail address" character set; the
/// domain is one or more dot-separated labels of letters, digits and inner
/// hyphens, each at most 63 characters.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    local_ok && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn check_email(raw: &str) -> Result<String, FieldError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(email.to_owned())
}

/// Validate the login form and build its request payload.
///
/// # Errors
///
/// Returns the first failing [`FieldError`].
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FieldError> {
    let email = check_email(email)?;
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

/// Validate the signup form and build its request payload.
///
/// The password/confirmation comparison runs before any other constraint.
///
/// # Errors
///
/// Returns the first failing [`FieldError`].
pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> Result<SignupRequest, FieldError> {
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    let email = check_email(email)?;
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    Ok(SignupRequest { name: name.to_owned(), email, password: password.to_owned() })
}

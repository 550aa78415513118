//! Login credentials accepted by the mock sign-in form.
//!
//! Credentials are checked for shape only. Nothing compares them against a
//! user store; a well-formed pair signs the visitor in as a customer.

use std::fmt;

use zeroize::Zeroizing;

use super::Role;

/// Role granted to anyone signing in through the credential form.
pub const CREDENTIAL_LOGIN_ROLE: Role = Role::Customer;

/// Rejected login form values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Well-formed login form input.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; whitespace is kept as typed.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" neo ", "matrix").unwrap();
/// assert_eq!(creds.username(), "neo");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginCredentials {
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

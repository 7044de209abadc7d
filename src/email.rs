//! A validated email address type.

use std::{fmt::Display, str::FromStr};

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::Error;

/// An email address that has been checked for a valid format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create and validate an email address.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidEmail] if `raw_email` is not a valid email
    /// address.
    pub fn new(raw_email: &str) -> Result<Self, Error> {
        EmailAddress::from_str(raw_email)
            .map(|address| Self(address.to_string()))
            .map_err(|_| Error::InvalidEmail(raw_email.to_string()))
    }

    /// Create a new `Email` without any validation.
    ///
    /// The caller should ensure that `raw_email` is a correctly formatted
    /// email address. For emails coming from the user this function should
    /// **not** be used, instead use the checked version.
    pub fn new_unchecked(raw_email: String) -> Self {
        Self(raw_email)
    }

    /// The email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

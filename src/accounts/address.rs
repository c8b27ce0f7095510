use std::fmt;

use super::AccountError;

/// A validated `user@domain` account identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SipAddress {
    user: String,
    domain: String,
}

impl SipAddress {
    /// Validates `raw` as an account identifier.
    ///
    /// # Errors
    /// Returns `AccountError::InvalidAddress` unless `raw` is a single
    /// non-empty user part, `@`, and a domain of letters, digits, `-` and `.`.
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        let invalid = |reason: &str| AccountError::InvalidAddress {
            address: raw.to_string(),
            reason: reason.to_string(),
        };

        let (user, domain) = raw
            .split_once('@')
            .ok_or_else(|| invalid("expected user@domain"))?;

        if user.is_empty() {
            return Err(invalid("user part is empty"));
        }
        if user.chars().any(|c| c.is_whitespace() || c == ':' || c == '@') {
            return Err(invalid("user part contains illegal characters"));
        }
        if domain.is_empty() {
            return Err(invalid("domain is empty"));
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
            || domain.starts_with('.')
            || domain.ends_with('.')
        {
            return Err(invalid("domain is not a valid host name"));
        }

        Ok(Self {
            user: user.to_string(),
            domain: domain.to_string(),
        })
    }

    /// Part before the `@`.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Part after the `@`.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for SipAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.domain)
    }
}

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_EMAIL_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("author id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

/// Display name, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "name cannot exceed {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_EMAIL_CHARS {
            return Err(DomainError::Validation(format!(
                "email cannot exceed {MAX_EMAIL_CHARS} characters"
            )));
        }
        if !is_well_formed(trimmed) {
            return Err(DomainError::Validation(
                "email must be a valid address".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_well_formed(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_id_rejects_non_positive() {
        assert!(AuthorId::new(0).is_err());
        assert!(AuthorId::new(-3).is_err());
        assert!(AuthorId::new(1).is_ok());
    }

    #[test]
    fn name_is_trimmed_and_bounded() {
        let name = AuthorName::new("  Jón Jónsson  ").unwrap();
        assert_eq!(name.as_str(), "Jón Jónsson");
        assert!(AuthorName::new("   ").is_err());
        assert!(AuthorName::new("x".repeat(MAX_NAME_CHARS + 1)).is_err());
        assert!(AuthorName::new("x".repeat(MAX_NAME_CHARS)).is_ok());
    }

    #[test]
    fn email_requires_address_form() {
        assert!(EmailAddress::new("jon@example.com").is_ok());
        assert!(EmailAddress::new("jon@example").is_err());
        assert!(EmailAddress::new("not-an-email").is_err());
        assert!(EmailAddress::new("a b@example.com").is_err());
        assert!(EmailAddress::new("a@b@example.com").is_err());
    }
}

use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_EXCERPT_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NewsId(pub i64);

impl NewsId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("news id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NewsId> for i64 {
    fn from(value: NewsId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsTitle(String);

impl NewsTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "title", MAX_TITLE_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsExcerpt(String);

impl NewsExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "excerpt", MAX_EXCERPT_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body text; non-empty but otherwise unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsContent(String);

impl NewsContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSlug(String);

impl NewsSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NewsSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NewsSlug> for String {
    fn from(value: NewsSlug) -> Self {
        value.0
    }
}

fn bounded_text(value: String, field: &str, max_chars: usize) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > max_chars {
        return Err(DomainError::Validation(format!(
            "{field} cannot exceed {max_chars} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_trims_before_bound_check() {
        let title = NewsTitle::new(format!("  {}  ", "x".repeat(MAX_TITLE_CHARS))).unwrap();
        assert_eq!(title.as_str().len(), MAX_TITLE_CHARS);
        assert!(NewsTitle::new("x".repeat(MAX_TITLE_CHARS + 1)).is_err());
        assert!(NewsTitle::new("  ").is_err());
    }

    #[test]
    fn excerpt_bound_is_five_hundred() {
        assert!(NewsExcerpt::new("x".repeat(MAX_EXCERPT_CHARS)).is_ok());
        assert!(NewsExcerpt::new("x".repeat(MAX_EXCERPT_CHARS + 1)).is_err());
    }

    #[test]
    fn content_only_requires_non_empty() {
        assert!(NewsContent::new("x".repeat(10_000)).is_ok());
        assert!(NewsContent::new(" \n ").is_err());
    }
}

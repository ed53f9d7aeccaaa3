// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, AuthorName, EmailAddress};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: AuthorName,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct AuthorUpdate {
    pub id: AuthorId,
    pub name: Option<AuthorName>,
    pub email: Option<EmailAddress>,
    pub updated_at: DateTime<Utc>,
}

impl AuthorUpdate {
    pub fn new(id: AuthorId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            email: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: AuthorName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }
}

use crate::domain::author::entity::{Author, AuthorUpdate, NewAuthor};
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;
    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author>;
    async fn delete(&self, id: AuthorId) -> DomainResult<()>;
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    /// Returns one page ordered by id descending, plus the total row count.
    async fn list_page(&self, limit: u32, offset: u64) -> DomainResult<(Vec<Author>, u64)>;
}

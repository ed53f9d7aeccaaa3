use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNewsItem, NewsItem, NewsUpdate, NewsWithAuthor};
use crate::domain::news::value_objects::{NewsId, NewsSlug};
use async_trait::async_trait;

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem>;
    async fn update(&self, update: NewsUpdate) -> DomainResult<NewsItem>;
    async fn delete(&self, id: NewsId) -> DomainResult<()>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<NewsItem>>;
    /// Number of news items referencing the given author.
    async fn count_by_author(&self, author_id: AuthorId) -> DomainResult<u64>;
    /// Returns one page ordered by created_at descending (id descending as
    /// tiebreak), plus the total row count.
    async fn list_page(&self, limit: u32, offset: u64)
        -> DomainResult<(Vec<NewsWithAuthor>, u64)>;
}

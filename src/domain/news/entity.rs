// src/domain/news/entity.rs
use crate::domain::author::Author;
use crate::domain::author::value_objects::AuthorId;
use crate::domain::news::value_objects::{NewsContent, NewsExcerpt, NewsId, NewsSlug, NewsTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct NewsItem {
    pub id: NewsId,
    pub slug: NewsSlug,
    pub title: NewsTitle,
    pub excerpt: NewsExcerpt,
    pub content: NewsContent,
    pub published: bool,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A news item joined with the author it references.
#[derive(Debug, Clone)]
pub struct NewsWithAuthor {
    pub item: NewsItem,
    pub author: Author,
}

#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub slug: NewsSlug,
    pub title: NewsTitle,
    pub excerpt: NewsExcerpt,
    pub content: NewsContent,
    pub published: bool,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value. The slug is only
/// set alongside a title change.
#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub id: NewsId,
    pub slug: Option<NewsSlug>,
    pub title: Option<NewsTitle>,
    pub excerpt: Option<NewsExcerpt>,
    pub content: Option<NewsContent>,
    pub published: Option<bool>,
    pub author_id: Option<AuthorId>,
    pub updated_at: DateTime<Utc>,
}

impl NewsUpdate {
    pub fn new(id: NewsId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            title: None,
            excerpt: None,
            content: None,
            published: None,
            author_id: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: NewsTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: NewsSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_excerpt(mut self, excerpt: NewsExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_content(mut self, content: NewsContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }
}

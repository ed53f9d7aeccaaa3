// tests/support/mocks.rs
use async_trait::async_trait;
use frettir::domain::author::{
    Author, AuthorId, AuthorRepository, AuthorUpdate, NewAuthor,
};
use frettir::domain::errors::{DomainError, DomainResult};
use frettir::domain::news::{
    NewNewsItem, NewsId, NewsItem, NewsReadRepository, NewsSlug, NewsUpdate, NewsWithAuthor,
    NewsWriteRepository,
};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

/* -------------------------------- AuthorRepository -------------------------------- */

#[derive(Default)]
struct AuthorState {
    next_id: i64,
    rows: HashMap<i64, Author>,
}

#[derive(Default)]
pub struct InMemoryAuthorRepo {
    inner: Mutex<AuthorState>,
}

impl InMemoryAuthorRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn snapshot(&self, id: i64) -> Option<Author> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepo {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        let row = Author {
            id: AuthorId::new(id)?,
            name: author.name,
            email: author.email,
            created_at: author.created_at,
            updated_at: author.updated_at,
        };
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, update: AuthorUpdate) -> DomainResult<Author> {
        let mut state = self.inner.lock().unwrap();
        let row = state
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(email) = update.email {
            row.email = email;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("author not found".into()))
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.inner.lock().unwrap().rows.get(&i64::from(id)).cloned())
    }

    async fn list_page(&self, limit: u32, offset: u64) -> DomainResult<(Vec<Author>, u64)> {
        let state = self.inner.lock().unwrap();
        let total = state.rows.len() as u64;
        let mut rows: Vec<Author> = state.rows.values().cloned().collect();
        rows.sort_by_key(|a| std::cmp::Reverse(i64::from(a.id)));
        let page = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

/* -------------------------------- News repositories -------------------------------- */

#[derive(Default)]
struct NewsState {
    next_id: i64,
    rows: HashMap<i64, NewsItem>,
}

/// Backs both the read and write repository traits; slug uniqueness is
/// enforced on write the way the database constraint would.
pub struct InMemoryNewsRepo {
    inner: Mutex<NewsState>,
    authors: Arc<InMemoryAuthorRepo>,
}

impl InMemoryNewsRepo {
    pub fn new(authors: &Arc<InMemoryAuthorRepo>) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(NewsState::default()),
            authors: Arc::clone(authors),
        })
    }

    pub fn row_count(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsRepo {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        let mut state = self.inner.lock().unwrap();
        if state
            .rows
            .values()
            .any(|row| row.slug.as_str() == item.slug.as_str())
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        state.next_id += 1;
        let id = state.next_id;
        let row = NewsItem {
            id: NewsId::new(id)?,
            slug: item.slug,
            title: item.title,
            excerpt: item.excerpt,
            content: item.content,
            published: item.published,
            author_id: item.author_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<NewsItem> {
        let mut state = self.inner.lock().unwrap();
        let id = i64::from(update.id);

        if let Some(slug) = &update.slug {
            let taken = state
                .rows
                .values()
                .any(|row| i64::from(row.id) != id && row.slug.as_str() == slug.as_str());
            if taken {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        let row = state
            .rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))?;

        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(excerpt) = update.excerpt {
            row.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            row.content = content;
        }
        if let Some(published) = update.published {
            row.published = published;
        }
        if let Some(author_id) = update.author_id {
            row.author_id = author_id;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("news item not found".into()))
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsRepo {
    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<NewsItem>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .find(|row| row.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn count_by_author(&self, author_id: AuthorId) -> DomainResult<u64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|row| row.author_id == author_id)
            .count() as u64)
    }

    async fn list_page(
        &self,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<NewsWithAuthor>, u64)> {
        let rows: Vec<NewsItem> = {
            let state = self.inner.lock().unwrap();
            state.rows.values().cloned().collect()
        };
        let total = rows.len() as u64;

        let mut rows = rows;
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let mut page = Vec::new();
        for item in rows.into_iter().skip(offset as usize).take(limit as usize) {
            let author = self
                .authors
                .snapshot(i64::from(item.author_id))
                .ok_or_else(|| DomainError::Persistence("author row missing".into()))?;
            page.push(NewsWithAuthor { item, author });
        }
        Ok((page, total))
    }
}

/* -------------------------------- Conflict injection -------------------------------- */

/// Write repository that reports a slug conflict for the first
/// `conflicts` writes, then delegates. Mirrors a concurrent create racing
/// past the resolver's existence check.
pub struct ConflictingWrites {
    inner: Arc<InMemoryNewsRepo>,
    conflicts_left: AtomicU32,
}

impl ConflictingWrites {
    pub fn new(inner: &Arc<InMemoryNewsRepo>, conflicts: u32) -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::clone(inner),
            conflicts_left: AtomicU32::new(conflicts),
        })
    }

    fn take_conflict(&self) -> bool {
        self.conflicts_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok()
    }
}

/// Write repository whose writes fail the author foreign key, as when the
/// author is deleted between the service's existence check and the write.
pub struct DanglingAuthorWrites;

impl DanglingAuthorWrites {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

#[async_trait]
impl NewsWriteRepository for DanglingAuthorWrites {
    async fn insert(&self, _item: NewNewsItem) -> DomainResult<NewsItem> {
        Err(DomainError::ReferenceViolation("author not found".into()))
    }

    async fn update(&self, _update: NewsUpdate) -> DomainResult<NewsItem> {
        Err(DomainError::ReferenceViolation("author not found".into()))
    }

    async fn delete(&self, _id: NewsId) -> DomainResult<()> {
        Err(DomainError::ReferenceViolation("author not found".into()))
    }
}

#[async_trait]
impl NewsWriteRepository for ConflictingWrites {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        if self.take_conflict() {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        self.inner.insert(item).await
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<NewsItem> {
        if self.take_conflict() {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

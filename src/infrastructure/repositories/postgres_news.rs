// src/infrastructure/repositories/postgres_news.rs
use super::map_sqlx;
use crate::domain::author::{Author, AuthorId, AuthorName, EmailAddress};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    NewNewsItem, NewsContent, NewsExcerpt, NewsId, NewsItem, NewsReadRepository, NewsSlug,
    NewsTitle, NewsUpdate, NewsWithAuthor, NewsWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const NEWS_COLUMNS: &str =
    "id, slug, title, excerpt, content, published, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresNewsWriteRepository {
    pool: PgPool,
}

impl PostgresNewsWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresNewsReadRepository {
    pool: PgPool,
}

impl PostgresNewsReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsRow {
    id: i64,
    slug: String,
    title: String,
    excerpt: String,
    content: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NewsRow> for NewsItem {
    type Error = DomainError;

    fn try_from(row: NewsRow) -> Result<Self, Self::Error> {
        Ok(NewsItem {
            id: NewsId::new(row.id)?,
            slug: NewsSlug::new(row.slug)?,
            title: NewsTitle::new(row.title)?,
            excerpt: NewsExcerpt::new(row.excerpt)?,
            content: NewsContent::new(row.content)?,
            published: row.published,
            author_id: AuthorId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct NewsWithAuthorRow {
    id: i64,
    slug: String,
    title: String,
    excerpt: String,
    content: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    author_email: String,
    author_created_at: DateTime<Utc>,
    author_updated_at: DateTime<Utc>,
}

impl TryFrom<NewsWithAuthorRow> for NewsWithAuthor {
    type Error = DomainError;

    fn try_from(row: NewsWithAuthorRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: AuthorId::new(row.author_id)?,
            name: AuthorName::new(row.author_name)?,
            email: EmailAddress::new(row.author_email)?,
            created_at: row.author_created_at,
            updated_at: row.author_updated_at,
        };
        let item = NewsItem {
            id: NewsId::new(row.id)?,
            slug: NewsSlug::new(row.slug)?,
            title: NewsTitle::new(row.title)?,
            excerpt: NewsExcerpt::new(row.excerpt)?,
            content: NewsContent::new(row.content)?,
            published: row.published,
            author_id: author.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        };
        Ok(NewsWithAuthor { item, author })
    }
}

#[async_trait]
impl NewsWriteRepository for PostgresNewsWriteRepository {
    async fn insert(&self, item: NewNewsItem) -> DomainResult<NewsItem> {
        let NewNewsItem {
            slug,
            title,
            excerpt,
            content,
            published,
            author_id,
            created_at,
            updated_at,
        } = item;

        let row = sqlx::query_as::<_, NewsRow>(
            "INSERT INTO news (slug, title, excerpt, content, published, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, slug, title, excerpt, content, published, author_id, created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(excerpt.as_str())
        .bind(content.as_str())
        .bind(published)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        NewsItem::try_from(row)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<NewsItem> {
        let NewsUpdate {
            id,
            slug,
            title,
            excerpt,
            content,
            published,
            author_id,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE news SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.as_str().to_string());
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.as_str().to_string());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.as_str().to_string());
        }

        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, slug, title, excerpt, content, published, author_id, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<NewsRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("news item not found".into()))?;
        NewsItem::try_from(row)
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("news item not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsReadRepository for PostgresNewsReadRepository {
    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<NewsItem>> {
        let row = sqlx::query_as::<_, NewsRow>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(NewsItem::try_from).transpose()
    }

    async fn count_by_author(&self, author_id: AuthorId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news WHERE author_id = $1")
            .bind(i64::from(author_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count as u64)
    }

    async fn list_page(
        &self,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<NewsWithAuthor>, u64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, NewsWithAuthorRow>(
            "SELECT n.id, n.slug, n.title, n.excerpt, n.content, n.published, n.author_id,
                    n.created_at, n.updated_at,
                    a.name AS author_name, a.email AS author_email,
                    a.created_at AS author_created_at, a.updated_at AS author_updated_at
             FROM news n
             JOIN authors a ON a.id = n.author_id
             ORDER BY n.created_at DESC, n.id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let records = rows
            .into_iter()
            .map(NewsWithAuthor::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, total as u64))
    }
}

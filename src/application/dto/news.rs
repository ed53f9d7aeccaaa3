use crate::application::dto::AuthorDto;
use crate::domain::news::NewsWithAuthor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub published: bool,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NewsWithAuthor> for NewsDto {
    fn from(record: NewsWithAuthor) -> Self {
        let NewsWithAuthor { item, author } = record;
        Self {
            id: item.id.into(),
            slug: item.slug.into(),
            title: item.title.as_str().to_string(),
            excerpt: item.excerpt.as_str().to_string(),
            content: item.content.as_str().to_string(),
            published: item.published,
            author: author.into(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

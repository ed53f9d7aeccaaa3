use super::NewsQueryService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::{NewsSlug, NewsWithAuthor},
};

pub struct GetNewsBySlugQuery {
    pub slug: String,
}

impl NewsQueryService {
    pub async fn get_news_by_slug(&self, query: GetNewsBySlugQuery) -> ApplicationResult<NewsDto> {
        let slug = NewsSlug::new(query.slug)?;
        let item = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let author = self
            .author_repo
            .find_by_id(item.author_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::infrastructure("author row missing for persisted news item")
            })?;

        Ok(NewsWithAuthor { item, author }.into())
    }
}

// src/application/commands/news/create.rs
use super::{NewsCommandService, service::SLUG_CONFLICT_RETRIES};
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult, ValidationErrors},
    },
    domain::{
        author::AuthorId,
        errors::DomainError,
        news::{NewNewsItem, NewsContent, NewsExcerpt, NewsTitle, NewsWithAuthor},
    },
};

pub struct CreateNewsCommand {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: i64,
    pub published: bool,
}

impl NewsCommandService {
    pub async fn create_news(&self, command: CreateNewsCommand) -> ApplicationResult<NewsDto> {
        let title = NewsTitle::new(command.title);
        let excerpt = NewsExcerpt::new(command.excerpt);
        let content = NewsContent::new(command.content);
        let author_id = AuthorId::new(command.author_id);
        ValidationErrors::from_fields([
            ("title", title.as_ref().err()),
            ("excerpt", excerpt.as_ref().err()),
            ("content", content.as_ref().err()),
            ("authorId", author_id.as_ref().err()),
        ])
        .into_result()?;

        let title = NewsTitle::new(self.sanitizer.sanitize(title?.as_str()))?;
        let excerpt = NewsExcerpt::new(self.sanitizer.sanitize(excerpt?.as_str()))?;
        let content = NewsContent::new(self.sanitizer.sanitize(content?.as_str()))?;
        let author_id = author_id?;

        // Referential check before any write.
        let author = self
            .author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::referential_conflict("author not found"))?;

        let now = self.clock.now();
        let mut attempts = 0u32;
        let created = loop {
            let slug = self.slug_service.resolve(&title, None).await?;
            let item = NewNewsItem {
                slug,
                title: title.clone(),
                excerpt: excerpt.clone(),
                content: content.clone(),
                published: command.published,
                author_id,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(item).await {
                Ok(created) => break created,
                Err(DomainError::Conflict(_)) if attempts < SLUG_CONFLICT_RETRIES => {
                    attempts += 1;
                    tracing::warn!(attempts, "slug conflict on insert, recomputing");
                }
                Err(DomainError::Conflict(_)) => {
                    return Err(ApplicationError::infrastructure(
                        "could not allocate a unique slug",
                    ));
                }
                // Author deleted between the existence check and the insert.
                Err(DomainError::ReferenceViolation(msg)) => {
                    return Err(ApplicationError::referential_conflict(msg));
                }
                Err(err) => return Err(err.into()),
            }
        };

        Ok(NewsWithAuthor {
            item: created,
            author,
        }
        .into())
    }
}

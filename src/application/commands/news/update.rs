// src/application/commands/news/update.rs
use super::{NewsCommandService, service::SLUG_CONFLICT_RETRIES};
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult, ValidationErrors},
    },
    domain::{
        author::{Author, AuthorId},
        errors::DomainError,
        news::{NewsContent, NewsExcerpt, NewsSlug, NewsTitle, NewsUpdate, NewsWithAuthor},
    },
};

pub struct UpdateNewsCommand {
    pub slug: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub published: Option<bool>,
}

impl UpdateNewsCommand {
    fn has_fields(&self) -> bool {
        self.title.is_some()
            || self.excerpt.is_some()
            || self.content.is_some()
            || self.author_id.is_some()
            || self.published.is_some()
    }
}

impl NewsCommandService {
    pub async fn update_news(&self, command: UpdateNewsCommand) -> ApplicationResult<NewsDto> {
        if !command.has_fields() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let slug = NewsSlug::new(command.slug)?;
        let existing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        let title = command.title.map(NewsTitle::new).transpose();
        let excerpt = command.excerpt.map(NewsExcerpt::new).transpose();
        let content = command.content.map(NewsContent::new).transpose();
        let author_id = command.author_id.map(AuthorId::new).transpose();
        ValidationErrors::from_fields([
            ("title", title.as_ref().err()),
            ("excerpt", excerpt.as_ref().err()),
            ("content", content.as_ref().err()),
            ("authorId", author_id.as_ref().err()),
        ])
        .into_result()?;

        // Referential check whenever the author reference changes.
        let new_author = match author_id? {
            Some(author_id) => Some(
                self.author_repo
                    .find_by_id(author_id)
                    .await?
                    .ok_or_else(|| ApplicationError::referential_conflict("author not found"))?,
            ),
            None => None,
        };

        let mut update = NewsUpdate::new(existing.id, self.clock.now());

        let new_title = match title? {
            Some(title) => {
                let title = NewsTitle::new(self.sanitizer.sanitize(title.as_str()))?;
                // A title change recomputes the slug, ignoring our own row.
                let next = self.slug_service.resolve(&title, Some(existing.id)).await?;
                update = update.with_title(title.clone()).with_slug(next);
                Some(title)
            }
            None => None,
        };
        if let Some(excerpt) = excerpt? {
            update =
                update.with_excerpt(NewsExcerpt::new(self.sanitizer.sanitize(excerpt.as_str()))?);
        }
        if let Some(content) = content? {
            update =
                update.with_content(NewsContent::new(self.sanitizer.sanitize(content.as_str()))?);
        }
        if let Some(author) = &new_author {
            update = update.with_author(author.id);
        }
        if let Some(published) = command.published {
            update = update.with_published(published);
        }

        let mut attempts = 0u32;
        let updated = loop {
            match self.write_repo.update(update.clone()).await {
                Ok(updated) => break updated,
                Err(DomainError::Conflict(msg)) => {
                    let Some(title) = new_title.as_ref() else {
                        return Err(DomainError::Conflict(msg).into());
                    };
                    if attempts >= SLUG_CONFLICT_RETRIES {
                        return Err(ApplicationError::infrastructure(
                            "could not allocate a unique slug",
                        ));
                    }
                    attempts += 1;
                    tracing::warn!(attempts, "slug conflict on update, recomputing");
                    let next = self.slug_service.resolve(title, Some(existing.id)).await?;
                    update = update.with_slug(next);
                }
                Err(DomainError::ReferenceViolation(msg)) => {
                    return Err(ApplicationError::referential_conflict(msg));
                }
                Err(err) => return Err(err.into()),
            }
        };

        let author = match new_author {
            Some(author) => author,
            None => self.author_of(&updated).await?,
        };

        Ok(NewsWithAuthor {
            item: updated,
            author,
        }
        .into())
    }

    pub(super) async fn author_of(
        &self,
        item: &crate::domain::news::NewsItem,
    ) -> ApplicationResult<Author> {
        self.author_repo
            .find_by_id(item.author_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::infrastructure("author row missing for persisted news item")
            })
    }
}

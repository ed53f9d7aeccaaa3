// src/application/commands/news/delete.rs
use super::NewsCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::news::NewsSlug,
};

pub struct DeleteNewsCommand {
    pub slug: String,
}

impl NewsCommandService {
    pub async fn delete_news(&self, command: DeleteNewsCommand) -> ApplicationResult<()> {
        let slug = NewsSlug::new(command.slug)?;
        let existing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news item not found"))?;

        self.write_repo.delete(existing.id).await?;
        Ok(())
    }
}

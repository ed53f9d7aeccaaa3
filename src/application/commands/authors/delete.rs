// src/application/commands/authors/delete.rs
use super::AuthorCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::author::AuthorId,
};

pub struct DeleteAuthorCommand {
    pub id: i64,
}

impl AuthorCommandService {
    pub async fn delete_author(&self, command: DeleteAuthorCommand) -> ApplicationResult<()> {
        let id = AuthorId::new(command.id)?;

        let dependents = self.news_read_repo.count_by_author(id).await?;
        if dependents > 0 {
            return Err(ApplicationError::referential_conflict(format!(
                "author is referenced by {dependents} news item(s)"
            )));
        }

        self.author_repo.delete(id).await?;
        Ok(())
    }
}

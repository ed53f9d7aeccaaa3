use super::AuthorQueryService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::AuthorId,
};

pub struct GetAuthorQuery {
    pub id: i64,
}

impl AuthorQueryService {
    pub async fn get_author(&self, query: GetAuthorQuery) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(query.id)?;
        let author = self
            .author_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        Ok(author.into())
    }
}

use super::AuthorQueryService;
use crate::application::{
    dto::{AuthorDto, Page, PageRequest},
    error::ApplicationResult,
};

pub struct ListAuthorsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl AuthorQueryService {
    pub async fn list_authors(
        &self,
        query: ListAuthorsQuery,
    ) -> ApplicationResult<Page<AuthorDto>> {
        let request = PageRequest::from_params(query.limit, query.offset);
        let (rows, total) = self
            .author_repo
            .list_page(request.limit, request.offset)
            .await?;

        let data = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(data, request, total))
    }
}

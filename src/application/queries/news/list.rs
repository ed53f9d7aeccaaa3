use super::NewsQueryService;
use crate::application::{
    dto::{NewsDto, Page, PageRequest},
    error::ApplicationResult,
};

pub struct ListNewsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

impl NewsQueryService {
    pub async fn list_news(&self, query: ListNewsQuery) -> ApplicationResult<Page<NewsDto>> {
        let request = PageRequest::from_params(query.limit, query.offset);
        let (rows, total) = self
            .read_repo
            .list_page(request.limit, request.offset)
            .await?;

        let data = rows.into_iter().map(Into::into).collect();
        Ok(Page::new(data, request, total))
    }
}

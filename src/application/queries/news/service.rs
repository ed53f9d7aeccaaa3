use std::sync::Arc;

use crate::domain::{author::AuthorRepository, news::NewsReadRepository};

pub struct NewsQueryService {
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
}

impl NewsQueryService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self {
            read_repo,
            author_repo,
        }
    }
}

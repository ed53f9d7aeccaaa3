// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::Sanitizer},
    domain::{author::AuthorRepository, news::NewsReadRepository},
};

pub struct AuthorCommandService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) news_read_repo: Arc<dyn NewsReadRepository>,
    pub(super) sanitizer: Arc<dyn Sanitizer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        news_read_repo: Arc<dyn NewsReadRepository>,
        sanitizer: Arc<dyn Sanitizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            author_repo,
            news_read_repo,
            sanitizer,
            clock,
        }
    }
}

// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::Sanitizer},
    domain::{
        author::AuthorRepository,
        news::{NewsReadRepository, NewsWriteRepository, services::NewsSlugService},
    },
};

/// How many times a write is retried with a recomputed slug after the
/// storage unique constraint reports a collision. Concurrent creates of the
/// same title can race past the resolver's existence check; the constraint
/// is the backstop and this bound keeps recovery from looping forever.
pub(super) const SLUG_CONFLICT_RETRIES: u32 = 3;

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) slug_service: Arc<NewsSlugService>,
    pub(super) sanitizer: Arc<dyn Sanitizer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        slug_service: Arc<NewsSlugService>,
        sanitizer: Arc<dyn Sanitizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            slug_service,
            sanitizer,
            clock,
        }
    }
}

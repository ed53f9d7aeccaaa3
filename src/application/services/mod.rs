// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{authors::AuthorCommandService, news::NewsCommandService},
        ports::{
            time::Clock,
            util::{Sanitizer, SlugGenerator},
        },
        queries::{authors::AuthorQueryService, news::NewsQueryService},
    },
    domain::{
        author::AuthorRepository,
        news::{NewsReadRepository, NewsWriteRepository, services::NewsSlugService},
    },
};

pub struct ApplicationServices {
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
}

impl ApplicationServices {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        news_read_repo: Arc<dyn NewsReadRepository>,
        news_write_repo: Arc<dyn NewsWriteRepository>,
        sanitizer: Arc<dyn Sanitizer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(NewsSlugService::new(
            Arc::clone(&news_read_repo),
            Arc::clone(&slugger),
        ));

        let author_commands = Arc::new(AuthorCommandService::new(
            Arc::clone(&author_repo),
            Arc::clone(&news_read_repo),
            Arc::clone(&sanitizer),
            Arc::clone(&clock),
        ));

        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&news_write_repo),
            Arc::clone(&news_read_repo),
            Arc::clone(&author_repo),
            Arc::clone(&slug_service),
            Arc::clone(&sanitizer),
            Arc::clone(&clock),
        ));

        let author_queries = Arc::new(AuthorQueryService::new(Arc::clone(&author_repo)));
        let news_queries = Arc::new(NewsQueryService::new(
            Arc::clone(&news_read_repo),
            Arc::clone(&author_repo),
        ));

        Self {
            author_commands,
            author_queries,
            news_commands,
            news_queries,
        }
    }
}

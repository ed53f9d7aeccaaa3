pub mod mocks;

use frettir::application::services::ApplicationServices;
use frettir::domain::{
    author::AuthorRepository,
    news::{NewsReadRepository, NewsWriteRepository},
};
use frettir::infrastructure::{
    time::SystemClock,
    util::{HtmlSanitizer, IcelandicSlugGenerator},
};
use mocks::{InMemoryAuthorRepo, InMemoryNewsRepo};
use std::sync::Arc;

/// Wires the application services against in-memory repositories and the
/// real slugifier, sanitizer and clock implementations.
pub fn services(
    authors: &Arc<InMemoryAuthorRepo>,
    news: &Arc<InMemoryNewsRepo>,
) -> ApplicationServices {
    services_with_write(authors, news, Arc::clone(news) as Arc<dyn NewsWriteRepository>)
}

pub fn services_with_write(
    authors: &Arc<InMemoryAuthorRepo>,
    news: &Arc<InMemoryNewsRepo>,
    write_repo: Arc<dyn NewsWriteRepository>,
) -> ApplicationServices {
    ApplicationServices::new(
        Arc::clone(authors) as Arc<dyn AuthorRepository>,
        Arc::clone(news) as Arc<dyn NewsReadRepository>,
        write_repo,
        Arc::new(HtmlSanitizer::default()),
        Arc::new(SystemClock::default()),
        Arc::new(IcelandicSlugGenerator::default()),
    )
}

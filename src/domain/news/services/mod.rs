// src/domain/news/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::news::repository::NewsReadRepository;
use crate::domain::news::value_objects::{NewsId, NewsSlug, NewsTitle};

/// Fallback base when a title normalizes to nothing (e.g. all punctuation).
const FALLBACK_SLUG: &str = "news";

/// Domain service responsible for producing unique slugs for news items.
///
/// Candidates are tried in the order `base`, `base-2`, `base-3`, … and the
/// first one not held by another item wins. The check-then-act window is
/// backstopped by the storage unique constraint; callers retry on conflict.
pub struct NewsSlugService {
    read_repo: Arc<dyn NewsReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl NewsSlugService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn resolve(
        &self,
        title: &NewsTitle,
        exclude: Option<NewsId>,
    ) -> DomainResult<NewsSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut suffix = 2u64;

        loop {
            let slug = NewsSlug::new(candidate)?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if exclude == Some(existing.id) => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base}-{suffix}");
                    suffix += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}

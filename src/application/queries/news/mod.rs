// src/application/queries/news/mod.rs
mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetNewsBySlugQuery;
pub use list::ListNewsQuery;
pub use service::NewsQueryService;

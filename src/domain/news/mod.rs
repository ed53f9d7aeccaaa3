pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewNewsItem, NewsItem, NewsUpdate, NewsWithAuthor};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{NewsContent, NewsExcerpt, NewsId, NewsSlug, NewsTitle};

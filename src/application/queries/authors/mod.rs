// src/application/queries/authors/mod.rs
mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetAuthorQuery;
pub use list::ListAuthorsQuery;
pub use service::AuthorQueryService;

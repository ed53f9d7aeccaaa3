pub mod authors;
pub mod news;
pub mod pagination;

pub use authors::AuthorDto;
pub use news::NewsDto;
pub use pagination::{Page, PageRequest, Paging};

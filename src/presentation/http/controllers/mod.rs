pub mod authors;
pub mod news;

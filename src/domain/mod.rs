pub mod author;
pub mod errors;
pub mod news;

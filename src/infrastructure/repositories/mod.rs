mod error;
mod postgres_author;
mod postgres_news;

pub use error::map_sqlx;
pub use postgres_author::PostgresAuthorRepository;
pub use postgres_news::{PostgresNewsReadRepository, PostgresNewsWriteRepository};

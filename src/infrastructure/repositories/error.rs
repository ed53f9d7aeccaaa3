use crate::domain::errors::DomainError;

const CNT_NEWS_SLUG: &str = "news_slug_key";
const CNT_NEWS_AUTHOR: &str = "news_author_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NEWS_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_NEWS_AUTHOR => {
                        DomainError::ReferenceViolation("author not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::ReferenceViolation("referenced record missing".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

// src/application/commands/authors/update.rs
use super::AuthorCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult, ValidationErrors},
    },
    domain::author::{AuthorId, AuthorName, AuthorUpdate, EmailAddress},
};

pub struct UpdateAuthorCommand {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthorCommandService {
    pub async fn update_author(
        &self,
        command: UpdateAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(command.id)?;

        if command.name.is_none() && command.email.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let name = command.name.map(AuthorName::new).transpose();
        let email = command.email.map(EmailAddress::new).transpose();
        ValidationErrors::from_fields([
            ("name", name.as_ref().err()),
            ("email", email.as_ref().err()),
        ])
        .into_result()?;

        let mut update = AuthorUpdate::new(id, self.clock.now());
        if let Some(name) = name? {
            update = update.with_name(AuthorName::new(self.sanitizer.sanitize(name.as_str()))?);
        }
        if let Some(email) = email? {
            update =
                update.with_email(EmailAddress::new(self.sanitizer.sanitize(email.as_str()))?);
        }

        let updated = self.author_repo.update(update).await?;
        Ok(updated.into())
    }
}

// src/application/commands/authors/create.rs
use super::AuthorCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationResult, ValidationErrors},
    },
    domain::author::{AuthorName, EmailAddress, NewAuthor},
};

pub struct CreateAuthorCommand {
    pub name: String,
    pub email: String,
}

impl AuthorCommandService {
    pub async fn create_author(
        &self,
        command: CreateAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let name = AuthorName::new(command.name);
        let email = EmailAddress::new(command.email);
        ValidationErrors::from_fields([
            ("name", name.as_ref().err()),
            ("email", email.as_ref().err()),
        ])
        .into_result()?;

        // Sanitize the accepted fields before they reach persistence.
        let name = AuthorName::new(self.sanitizer.sanitize(name?.as_str()))?;
        let email = EmailAddress::new(self.sanitizer.sanitize(email?.as_str()))?;

        let now = self.clock.now();
        let created = self
            .author_repo
            .insert(NewAuthor {
                name,
                email,
                created_at: now,
                updated_at: now,
            })
            .await?;

        Ok(created.into())
    }
}

mod support;

use frettir::application::commands::authors::{
    CreateAuthorCommand, DeleteAuthorCommand, UpdateAuthorCommand,
};
use frettir::application::commands::news::CreateNewsCommand;
use frettir::application::error::ApplicationError;
use frettir::application::queries::authors::{GetAuthorQuery, ListAuthorsQuery};
use frettir::domain::errors::DomainError;
use support::mocks::{InMemoryAuthorRepo, InMemoryNewsRepo};

fn create_command(name: &str, email: &str) -> CreateAuthorCommand {
    CreateAuthorCommand {
        name: name.into(),
        email: email.into(),
    }
}

#[tokio::test]
async fn create_author_trims_and_sanitizes_fields() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let created = services
        .author_commands
        .create_author(create_command("  Jón <b>Jónsson</b>  ", "jon@example.com"))
        .await
        .unwrap();

    assert_eq!(created.name, "Jón Jónsson");
    assert_eq!(created.email, "jon@example.com");
    assert!(authors.snapshot(created.id).is_some());
}

#[tokio::test]
async fn create_author_enumerates_every_failing_field() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let err = services
        .author_commands
        .create_author(create_command("   ", "not-an-email"))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Invalid(errors) => {
            let map = errors.to_map();
            assert!(map.contains_key("name"));
            assert!(map.contains_key("email"));
        }
        other => panic!("expected field-level rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn update_author_rejects_empty_payload() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let created = services
        .author_commands
        .create_author(create_command("Jón", "jon@example.com"))
        .await
        .unwrap();

    let err = services
        .author_commands
        .update_author(UpdateAuthorCommand {
            id: created.id,
            name: None,
            email: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn update_author_applies_partial_fields() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let created = services
        .author_commands
        .create_author(create_command("Jón", "jon@example.com"))
        .await
        .unwrap();

    let updated = services
        .author_commands
        .update_author(UpdateAuthorCommand {
            id: created.id,
            name: None,
            email: Some("jon@frettir.is".into()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Jón");
    assert_eq!(updated.email, "jon@frettir.is");
}

#[tokio::test]
async fn non_positive_id_is_a_validation_error_not_a_miss() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let err = services
        .author_queries
        .get_author(GetAuthorQuery { id: 0 })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    let err = services
        .author_queries
        .get_author(GetAuthorQuery { id: 99 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn delete_author_blocked_while_news_reference_it() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let author = services
        .author_commands
        .create_author(create_command("Jón", "jon@example.com"))
        .await
        .unwrap();

    services
        .news_commands
        .create_news(CreateNewsCommand {
            title: "Frétt".into(),
            excerpt: "stutt".into(),
            content: "texti".into(),
            author_id: author.id,
            published: true,
        })
        .await
        .unwrap();

    let err = services
        .author_commands
        .delete_author(DeleteAuthorCommand { id: author.id })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::ReferentialConflict(_)));
    // The author must remain persisted after the rejection.
    assert!(authors.snapshot(author.id).is_some());
}

#[tokio::test]
async fn delete_author_without_dependents_succeeds() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    let author = services
        .author_commands
        .create_author(create_command("Jón", "jon@example.com"))
        .await
        .unwrap();

    services
        .author_commands
        .delete_author(DeleteAuthorCommand { id: author.id })
        .await
        .unwrap();

    assert!(authors.snapshot(author.id).is_none());
}

#[tokio::test]
async fn list_authors_pages_newest_id_first() {
    let authors = InMemoryAuthorRepo::new();
    let news = InMemoryNewsRepo::new(&authors);
    let services = support::services(&authors, &news);

    for i in 1..=3 {
        services
            .author_commands
            .create_author(create_command(&format!("Author {i}"), &format!("a{i}@example.com")))
            .await
            .unwrap();
    }

    let page = services
        .author_queries
        .list_authors(ListAuthorsQuery {
            limit: Some(2),
            offset: None,
        })
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.paging.total, 3);
    assert_eq!(page.data[0].name, "Author 3");

    // An offset past the end is not an error.
    let empty = services
        .author_queries
        .list_authors(ListAuthorsQuery {
            limit: Some(2),
            offset: Some(50),
        })
        .await
        .unwrap();
    assert!(empty.data.is_empty());
    assert_eq!(empty.paging.total, 3);
}

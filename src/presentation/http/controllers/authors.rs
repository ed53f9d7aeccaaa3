// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{CreateAuthorCommand, DeleteAuthorCommand, UpdateAuthorCommand},
    dto::{AuthorDto, Page},
    queries::authors::{GetAuthorQuery, ListAuthorsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[utoipa::path(
    get,
    path = "/authors",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, 1-100, defaults to 10"),
        ("offset" = Option<u64>, Query, description = "Rows to skip, defaults to 0")
    ),
    responses((status = 200, description = "One page of authors.", body = Page<AuthorDto>)),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors(ListAuthorsQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "The author.", body = AuthorDto),
        (status = 404, description = "No author with that id.")
    ),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_queries
        .get_author(GetAuthorQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created.", body = AuthorDto),
        (status = 400, description = "Invalid payload.")
    ),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<(StatusCode, Json<AuthorDto>)> {
    let created = state
        .services
        .author_commands
        .create_author(CreateAuthorCommand {
            name: payload.name,
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author identifier")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Author updated.", body = AuthorDto),
        (status = 400, description = "Invalid payload or empty update."),
        (status = 404, description = "No author with that id.")
    ),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAuthorRequest>,
) -> HttpResult<Json<AuthorDto>> {
    state
        .services
        .author_commands
        .update_author(UpdateAuthorCommand {
            id,
            name: payload.name,
            email: payload.email,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 204, description = "Author deleted."),
        (status = 400, description = "Author still referenced by news items."),
        (status = 404, description = "No author with that id.")
    ),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .author_commands
        .delete_author(DeleteAuthorCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::{CreateNewsCommand, DeleteNewsCommand, UpdateNewsCommand},
    dto::{NewsDto, Page},
    queries::news::{GetNewsBySlugQuery, ListNewsQuery},
};
use crate::presentation::http::controllers::authors::PageParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/news",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, 1-100, defaults to 10"),
        ("offset" = Option<u64>, Query, description = "Rows to skip, defaults to 0")
    ),
    responses((status = 200, description = "One page of news items, newest first.", body = Page<NewsDto>)),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<NewsDto>>> {
    state
        .services
        .news_queries
        .list_news(ListNewsQuery {
            limit: params.limit,
            offset: params.offset,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/{slug}",
    params(("slug" = String, Path, description = "News item slug")),
    responses(
        (status = 200, description = "The news item.", body = NewsDto),
        (status = 404, description = "No news item with that slug.")
    ),
    tag = "News"
)]
pub async fn get_news_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<NewsDto>> {
    state
        .services
        .news_queries
        .get_news_by_slug(GetNewsBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/news",
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "News item created; the slug is derived from the title.", body = NewsDto),
        (status = 400, description = "Invalid payload or unknown author.")
    ),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateNewsRequest>,
) -> HttpResult<(StatusCode, Json<NewsDto>)> {
    let created = state
        .services
        .news_commands
        .create_news(CreateNewsCommand {
            title: payload.title,
            excerpt: payload.excerpt,
            content: payload.content,
            author_id: payload.author_id,
            published: payload.published,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/news/{slug}",
    params(("slug" = String, Path, description = "News item slug")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "News item updated; a title change recomputes the slug.", body = NewsDto),
        (status = 400, description = "Invalid payload, empty update or unknown author."),
        (status = 404, description = "No news item with that slug.")
    ),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateNewsRequest>,
) -> HttpResult<Json<NewsDto>> {
    state
        .services
        .news_commands
        .update_news(UpdateNewsCommand {
            slug,
            title: payload.title,
            excerpt: payload.excerpt,
            content: payload.content,
            author_id: payload.author_id,
            published: payload.published,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/news/{slug}",
    params(("slug" = String, Path, description = "News item slug")),
    responses(
        (status = 204, description = "News item deleted."),
        (status = 404, description = "No news item with that slug.")
    ),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .news_commands
        .delete_news(DeleteNewsCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

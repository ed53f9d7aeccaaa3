// src/presentation/http/openapi.rs
use crate::application::dto::{AuthorDto, NewsDto, Page, Paging};
use crate::presentation::http::controllers::{authors, news};
use crate::presentation::http::routes;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "frettir",
        description = "News and author management API."
    ),
    paths(
        routes::health,
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        news::list_news,
        news::get_news_by_slug,
        news::create_news,
        news::update_news,
        news::delete_news,
    ),
    components(schemas(
        StatusResponse,
        AuthorDto,
        NewsDto,
        Paging,
        Page<AuthorDto>,
        Page<NewsDto>,
        authors::CreateAuthorRequest,
        authors::UpdateAuthorRequest,
        news::CreateNewsRequest,
        news::UpdateNewsRequest,
    )),
    tags(
        (name = "System", description = "Service status"),
        (name = "Authors", description = "Author management"),
        (name = "News", description = "News item management")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

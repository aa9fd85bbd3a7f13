// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::list_article_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::toggle_like,
        crate::presentation::http::controllers::comments::delete_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::CommentListParams,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::application::dto::ArticleCreateResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentCreatedDto,
            crate::application::dto::LikeStateDto
        )
    ),
    tags(
        (name = "Articles", description = "Article endpoints"),
        (name = "Comments", description = "Comment and like endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Inkpot API",
        description = "Articles, comments and likes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/docs`, backed by the document at `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

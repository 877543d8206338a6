//! ClickHouse 查询网关
//!
//! 以静态 Bearer Token 认证入站请求，并将 SQL 查询转发到
//! ClickHouse 的 HTTP 查询接口，原样回传响应。

pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

use axum::{extract::State, middleware, routing::get, Json, Router};
use common::middleware::{request_id_middleware, BearerAuth};
use state::AppState;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ClickHouse Bridge API",
        version = "1.0.0",
        description = "查询 ClickHouse 数据库的 OpenAPI 兼容网关"
    ),
    paths(
        handlers::execute_query,
        handlers::health_check,
    ),
    components(schemas(
        common::models::QueryRequest,
        handlers::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "query", description = "查询转发端点"),
        (name = "health", description = "健康检查端点")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// 创建完整的应用路由
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth = BearerAuth::new(state.config.bearer_token.clone());

    Router::new()
        .merge(routes::router(auth))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    if let Some(url) = &state.config.server_url {
        doc.servers = Some(vec![utoipa::openapi::Server::new(url.clone())]);
    }
    Json(doc)
}

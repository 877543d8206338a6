//! 网关路由模块

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use common::middleware::{bearer_auth_middleware, BearerAuth};

use crate::handlers;
use crate::state::AppState;

/// 创建网关路由
///
/// 只有查询端点经过认证中间件，健康检查保持开放。
pub fn router(auth: BearerAuth) -> Router<AppState> {
    Router::new()
        .route(
            "/query",
            post(handlers::execute_query)
                .layer(middleware::from_fn_with_state(auth, bearer_auth_middleware)),
        )
        .route("/health", get(handlers::health_check))
}

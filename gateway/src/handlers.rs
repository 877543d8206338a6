//! Handler模块

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use common::errors::AppError;
use common::models::QueryRequest;

use crate::service::QueryForwarder;
use crate::state::AppState;

/// 执行 ClickHouse 查询
///
/// 查询经过最小处理直接转发到 ClickHouse HTTP 接口，
/// 响应的格式与结构由 ClickHouse 决定。
#[utoipa::path(
    post,
    path = "/query",
    tag = "query",
    request_body = QueryRequest,
    responses(
        (status = 200, description = "ClickHouse 原始响应"),
        (status = 400, description = "请求校验失败或 ClickHouse 查询错误"),
        (status = 401, description = "缺失或无效的认证令牌"),
        (status = 503, description = "ClickHouse 不可达")
    ),
    security(("bearer_auth" = []))
)]
pub async fn execute_query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Response, AppError> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let forwarder = QueryForwarder::new(state.config.clickhouse.clone(), state.http_client.clone());
    let backend = forwarder.forward(&req).await?;

    // 逐字节回传：不校验、不重排、不重新编码
    let status = StatusCode::from_u16(backend.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, backend.content_type)
        .body(Body::from(backend.body))
        .map_err(|e| AppError::BackendUnavailable(e.to_string()))?;

    Ok(response)
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

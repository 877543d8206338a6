//! 查询转发服务模块
//!
//! 将 SQL 查询原样转发到 ClickHouse 的 HTTP 接口，并把响应
//! （状态码、响应体、content-type）逐字节回传。

use common::config::ClickHouseConfig;
use common::errors::{AppError, AppResult};
use common::models::QueryRequest;

/// 未指定格式时使用的 ClickHouse 输出格式
const DEFAULT_FORMAT: &str = "JSONCompact";

/// 后端缺失 content-type 时的回退值
const FALLBACK_CONTENT_TYPE: &str = "application/json";

/// ClickHouse 查询转发器
pub struct QueryForwarder {
    clickhouse: ClickHouseConfig,
    http_client: reqwest::Client,
}

/// ClickHouse 返回的原始响应
pub struct BackendResponse {
    /// 后端返回的 HTTP 状态码
    pub status: u16,

    /// 后端返回的 content-type
    pub content_type: String,

    /// 原始响应体，不做任何解析或转换
    pub body: Vec<u8>,
}

impl QueryForwarder {
    /// 创建新的查询转发器实例
    pub fn new(clickhouse: ClickHouseConfig, http_client: reqwest::Client) -> Self {
        Self {
            clickhouse,
            http_client,
        }
    }

    /// 转发 SQL 查询到 ClickHouse
    ///
    /// 后端的任何 HTTP 响应（包括查询错误）都原样返回；只有传输层
    /// 失败（连接拒绝、DNS、超时）会映射为 `BackendUnavailable`。
    pub async fn forward(&self, req: &QueryRequest) -> AppResult<BackendResponse> {
        let format = req.default_format.as_deref().unwrap_or(DEFAULT_FORMAT);
        let database = req.database.as_deref().unwrap_or(&self.clickhouse.database);

        let response = self
            .http_client
            .post(&self.clickhouse.url)
            .query(&[("default_format", format), ("database", database)])
            .basic_auth(&self.clickhouse.username, Some(&self.clickhouse.password))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(req.query.clone())
            .send()
            .await
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        // 响应体中途截断属于传输失败，同样映射为 503
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))?
            .to_vec();

        tracing::debug!(status, bytes = body.len(), "已转发查询到 ClickHouse");

        Ok(BackendResponse {
            status,
            content_type,
            body,
        })
    }
}

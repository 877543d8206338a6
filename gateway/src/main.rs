//! ClickHouse 查询网关服务
//!
//! 作为 ClickHouse HTTP 接口的轻量代理，提供以下功能：
//! - Bearer Token 认证
//! - SQL 查询原样转发与响应回传
//! - 请求日志与请求 ID 追踪

use anyhow::Context;
use common::config::AppConfig;
use gateway::state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "gateway";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = AppConfig::load().context("failed to load configuration")?;
    let addr = format!("{}:{}", config.host, config.port);

    // 创建应用状态与路由
    let state = AppState::new(config);
    let app = gateway::app(state);

    // 启动服务
    info!(service = SERVICE_NAME, address = %addr, "启动 ClickHouse 查询网关");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

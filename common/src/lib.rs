//! ClickHouse 查询网关公共模块
//!
//! 包含所有服务共享的基础设施：
//! - 环境配置加载
//! - 错误类型定义
//! - 认证与请求追踪中间件
//! - 请求/响应数据模型

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;

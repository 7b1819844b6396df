//! HTTP 服务

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::agent::AgentContext;

pub mod error;
pub mod routes;

/// 允许所有来源、方法与请求头，仅适用于开发环境
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 构建路由
pub fn build_router(context: AgentContext) -> Router {
    Router::new()
        .route("/", get(routes::health_check))
        .route("/chat", post(routes::chat))
        .route("/research", post(routes::research))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(context)
}

/// 绑定地址并开始服务
pub async fn serve(context: AgentContext, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to {}", addr))?;

    info!("🚀 AgentFlow 服务已启动: http://{}", addr);
    info!("  GET  /          - liveness");
    info!("  POST /chat      - intent-routed answer");
    info!("  POST /research  - research → plan → write pipeline");

    axum::serve(listener, build_router(context))
        .await
        .context("server terminated unexpectedly")
}

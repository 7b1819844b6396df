use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::agent::pipeline::{self, PipelineState};
use crate::agent::{AgentContext, ResponseEnvelope, handle_query};
use crate::server::error::{ApiError, ApiResult};

pub const LIVENESS_STATUS: &str = "AgentFlow AI backend running";

/// 请求体
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

impl ChatRequest {
    /// 空白查询在入口处拒绝，其余查询原样传递
    fn validated_query(&self) -> ApiResult<&str> {
        if self.query.trim().is_empty() {
            return Err(ApiError::BadRequest("query must not be empty".to_string()));
        }
        Ok(&self.query)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: LIVENESS_STATUS.to_string(),
    })
}

/// POST /chat
pub async fn chat(
    State(context): State<AgentContext>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ResponseEnvelope>> {
    let query = request.validated_query()?;
    let span = tracing::info_span!("chat", request_id = %uuid::Uuid::new_v4());

    let envelope = handle_query(&context, query).instrument(span).await?;
    Ok(Json(envelope))
}

/// POST /research
pub async fn research(
    State(context): State<AgentContext>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<PipelineState>> {
    let query = request.validated_query()?;
    let span = tracing::info_span!("research", request_id = %uuid::Uuid::new_v4());

    let state = pipeline::execute(&context, query).instrument(span).await?;
    Ok(Json(state))
}

//! 请求入口：分类意图后交给单轮应答

use anyhow::Result;
use tracing::info;

use crate::agent::context::AgentContext;
use crate::agent::intent::classify;
use crate::agent::responder::respond;
use crate::agent::types::ResponseEnvelope;

/// 处理一次查询
pub async fn handle_query(context: &AgentContext, query: &str) -> Result<ResponseEnvelope> {
    let intent = classify(query);
    info!(intent = %intent, "query classified");

    let envelope = respond(context, query, Some(intent)).await?;
    info!(
        agent = %envelope.agent,
        tools = ?envelope.tools_used,
        "query answered"
    );
    Ok(envelope)
}

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::agent::context::AgentContext;
use crate::agent::pipeline::stages::PipelineStage;
use crate::agent::pipeline::state::{PipelineState, StateField};
use crate::agent::prompts;
use crate::search::join_contents;

/// 联网搜索并提炼要点
#[derive(Default)]
pub struct ResearchStage;

#[async_trait]
impl PipelineStage for ResearchStage {
    fn name(&self) -> &'static str {
        "research"
    }

    fn input(&self) -> StateField {
        StateField::Query
    }

    fn output(&self) -> StateField {
        StateField::Research
    }

    async fn produce(
        &self,
        context: &AgentContext,
        _state: &PipelineState,
        query: &str,
    ) -> Result<String> {
        let hits = context
            .search
            .search(query, context.max_results)
            .await
            .context("research stage search failed")?;
        let web_data = join_contents(&hits);

        context
            .llm
            .invoke(&prompts::research_stage(query, &web_data))
            .await
    }
}

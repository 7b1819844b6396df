use anyhow::Result;
use async_trait::async_trait;

use crate::agent::context::AgentContext;
use crate::agent::pipeline::stages::PipelineStage;
use crate::agent::pipeline::state::{PipelineState, StateField};
use crate::agent::prompts;

#[derive(Default)]
pub struct WriteStage;

#[async_trait]
impl PipelineStage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn input(&self) -> StateField {
        StateField::Plan
    }

    fn output(&self) -> StateField {
        StateField::Answer
    }

    async fn produce(
        &self,
        context: &AgentContext,
        _state: &PipelineState,
        plan: &str,
    ) -> Result<String> {
        context.llm.invoke(&prompts::write_stage(plan)).await
    }
}

use anyhow::Result;
use async_trait::async_trait;

use crate::agent::context::AgentContext;
use crate::agent::pipeline::stages::PipelineStage;
use crate::agent::pipeline::state::{PipelineState, StateField};
use crate::agent::prompts;

/// 把调研要点整理成分节的提纲
#[derive(Default)]
pub struct PlanStage;

#[async_trait]
impl PipelineStage for PlanStage {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn input(&self) -> StateField {
        StateField::Research
    }

    fn output(&self) -> StateField {
        StateField::Plan
    }

    async fn produce(
        &self,
        context: &AgentContext,
        _state: &PipelineState,
        research: &str,
    ) -> Result<String> {
        context.llm.invoke(&prompts::plan_stage(research)).await
    }
}

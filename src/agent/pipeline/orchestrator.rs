use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::agent::context::AgentContext;
use crate::agent::pipeline::stages::{PipelineStage, PlanStage, ResearchStage, WriteStage};
use crate::agent::pipeline::state::PipelineState;

/// research → plan → write 三阶段编排器
#[derive(Default)]
pub struct ResearchOrchestrator;

impl ResearchOrchestrator {
    /// 依次执行全部阶段，任一阶段失败即中止
    pub async fn execute_pipeline(
        &self,
        context: &AgentContext,
        query: &str,
    ) -> Result<PipelineState> {
        info!("🚀 开始执行 research → plan → write 流程...");

        let state = PipelineState::new(query);
        let state = self.execute_stage(&ResearchStage, context, &state).await?;
        let state = self.execute_stage(&PlanStage, context, &state).await?;
        let state = self.execute_stage(&WriteStage, context, &state).await?;

        info!("✓ research → plan → write 流程执行完毕");
        Ok(state)
    }

    /// 执行单个阶段
    async fn execute_stage<T>(
        &self,
        stage: &T,
        context: &AgentContext,
        state: &PipelineState,
    ) -> Result<PipelineState>
    where
        T: PipelineStage,
    {
        info!("🤖 执行 {} 阶段...", stage.name());
        let started = Instant::now();

        let next = stage.execute(context, state).await?;
        info!(
            "✓ {} 阶段完成，耗时 {:.2}秒",
            stage.name(),
            started.elapsed().as_secs_f64()
        );
        Ok(next)
    }
}

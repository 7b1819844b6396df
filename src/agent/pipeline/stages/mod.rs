use anyhow::Result;
use async_trait::async_trait;

use crate::agent::context::AgentContext;
use crate::agent::pipeline::state::{PipelineState, StateField};

pub mod planner;
pub mod researcher;
pub mod writer;

pub use planner::PlanStage;
pub use researcher::ResearchStage;
pub use writer::WriteStage;

/// 流水线中的一个阶段：读取一个字段，写入下一个字段
#[async_trait]
pub trait PipelineStage: Send + Sync {
    /// 阶段名称
    fn name(&self) -> &'static str;

    /// 读取的字段
    fn input(&self) -> StateField;

    /// 写入的字段
    fn output(&self) -> StateField;

    /// 根据输入生成本阶段的产出
    async fn produce(
        &self,
        context: &AgentContext,
        state: &PipelineState,
        input: &str,
    ) -> Result<String>;

    /// 默认实现：校验输入与输出字段、生成产出、返回写入新字段后的状态
    async fn execute(
        &self,
        context: &AgentContext,
        state: &PipelineState,
    ) -> Result<PipelineState> {
        let input = state.read(self.input())?;
        // 输出字段已写入时不再调用协作者
        state.ensure_unwritten(self.output())?;
        let output = self.produce(context, state, input).await?;
        Ok(state.with(self.output(), output)?)
    }
}

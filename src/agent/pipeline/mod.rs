// 深度调研流水线
// research：联网搜索 + 提炼要点，写入 research
// plan：把要点整理为分节提纲，写入 plan
// write：把提纲写成带标题的正式说明，写入 answer

use anyhow::{Result, anyhow};

use crate::agent::context::AgentContext;
use crate::agent::pipeline::orchestrator::ResearchOrchestrator;

pub mod orchestrator;
pub mod stages;
pub mod state;

pub use state::{PipelineError, PipelineState, StateField};

/// 执行完整流水线，返回终态
pub async fn execute(context: &AgentContext, query: &str) -> Result<PipelineState> {
    let orchestrator = ResearchOrchestrator;
    orchestrator.execute_pipeline(context, query).await
}

/// 执行完整流水线，只返回最终回答
pub async fn run_agentic_flow(context: &AgentContext, query: &str) -> Result<String> {
    execute(context, query)
        .await?
        .answer
        .ok_or_else(|| anyhow!("pipeline finished without an answer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::pipeline::stages::{PipelineStage, PlanStage, ResearchStage, WriteStage};
    use crate::agent::test_support::{Call, Harness};

    #[tokio::test]
    async fn test_pipeline_populates_all_fields_in_order() {
        let harness = Harness::healthy();

        let state = execute(&harness.context, "explain agentic ai").await.unwrap();

        assert!(state.is_complete());
        assert_eq!(state.query, "explain agentic ai");
        assert_eq!(state.research.as_deref(), Some("reply #0"));
        assert_eq!(state.plan.as_deref(), Some("reply #1"));
        assert_eq!(state.answer.as_deref(), Some("reply #2"));

        let calls = harness.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], Call::Search("explain agentic ai".to_string()));
    }

    #[tokio::test]
    async fn test_each_stage_feeds_the_next() {
        let harness = Harness::healthy();

        execute(&harness.context, "explain agentic ai").await.unwrap();

        let prompts = harness.model_prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("User Query:\nexplain agentic ai"));
        assert!(prompts[0].contains("Web Data:\nsnippet one\nsnippet two"));
        assert!(prompts[1].contains("Research Information:\nreply #0"));
        assert!(prompts[2].contains("Structured Plan:\nreply #1"));
    }

    #[tokio::test]
    async fn test_run_agentic_flow_returns_answer() {
        let harness = Harness::healthy();

        let answer = run_agentic_flow(&harness.context, "history of tea")
            .await
            .unwrap();
        assert_eq!(answer, "reply #2");
    }

    #[tokio::test]
    async fn test_search_failure_aborts_pipeline() {
        let harness = Harness::new(None, None);

        let result = execute(&harness.context, "explain tides").await;

        assert!(result.is_err());
        assert!(harness.model_prompts().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_mid_pipeline_aborts() {
        let harness = Harness::new(Some(vec![]), Some(1));

        let result = execute(&harness.context, "explain tides").await;

        assert!(result.is_err());
        // 计划阶段失败后不再调用写作阶段
        assert_eq!(harness.model_prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_stage_requires_its_input() {
        let harness = Harness::healthy();
        let state = PipelineState::new("q");

        let err = PlanStage.execute(&harness.context, &state).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PipelineError>(),
            Some(&PipelineError::MissingInput(StateField::Research))
        );
        assert!(harness.calls().is_empty());
    }

    #[tokio::test]
    async fn test_stage_refuses_to_overwrite() {
        let harness = Harness::healthy();
        let state = PipelineState::new("q")
            .with(StateField::Research, "r".to_string())
            .and_then(|s| s.with(StateField::Plan, "p".to_string()))
            .and_then(|s| s.with(StateField::Answer, "a".to_string()))
            .unwrap();

        let err = WriteStage.execute(&harness.context, &state).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PipelineError>(),
            Some(&PipelineError::FieldAlreadyWritten(StateField::Answer))
        );
        assert!(harness.calls().is_empty());
    }

    #[tokio::test]
    async fn test_research_stage_skips_search_when_already_researched() {
        let harness = Harness::healthy();
        let state = PipelineState::new("q")
            .with(StateField::Research, "r".to_string())
            .unwrap();

        let err = ResearchStage.execute(&harness.context, &state).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<PipelineError>(),
            Some(&PipelineError::FieldAlreadyWritten(StateField::Research))
        );
        assert_eq!(harness.search_calls(), 0);
        assert!(harness.model_prompts().is_empty());
    }
}

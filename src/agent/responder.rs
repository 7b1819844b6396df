//! 单轮应答：llm / search / research 三种策略各调用一次模型

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::{debug, warn};

use crate::agent::context::AgentContext;
use crate::agent::prompts;
use crate::agent::types::{AgentKind, Intent, ResponseEnvelope, ToolKind};
use crate::search::join_contents;

/// 按意图生成回答。`intent` 为 `None` 时走兜底分支
pub async fn respond(
    context: &AgentContext,
    query: &str,
    intent: Option<Intent>,
) -> Result<ResponseEnvelope> {
    let (agent, answer, tools_used) = match intent {
        Some(Intent::Llm) => {
            let answer = context.llm.invoke(query).await?;
            (AgentKind::LlmAgent, answer, BTreeSet::new())
        }
        Some(Intent::Search) => {
            let results = gather_search_results(context, query).await;
            let answer = context
                .llm
                .invoke(&prompts::search_answer(&results, query))
                .await?;
            (
                AgentKind::SearchAgent,
                answer,
                BTreeSet::from([ToolKind::Search]),
            )
        }
        Some(Intent::Research) => {
            let results = gather_search_results(context, query).await;
            let answer = context
                .llm
                .invoke(&prompts::research_answer(&results, query))
                .await?;
            (
                AgentKind::ResearchAgent,
                answer,
                BTreeSet::from([ToolKind::Search]),
            )
        }
        None => {
            warn!("⚠️ 无法识别的意图，使用兜底策略");
            let answer = context.llm.invoke(query).await?;
            (AgentKind::FallbackAgent, answer, BTreeSet::new())
        }
    };

    Ok(ResponseEnvelope {
        answer,
        agent,
        intent,
        tools_used,
    })
}

/// 搜索并拼接结果；失败或无内容时返回空串，不中断请求
async fn gather_search_results(context: &AgentContext, query: &str) -> String {
    match context.search.search(query, context.max_results).await {
        Ok(hits) => {
            let joined = join_contents(&hits);
            if joined.is_empty() {
                warn!("⚠️ 搜索没有返回可用内容，继续使用空结果");
            } else {
                debug!(hits = hits.len(), "search results gathered");
            }
            joined
        }
        Err(e) => {
            warn!("⚠️ 搜索失败，继续使用空结果: {:#}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::test_support::{Call, Harness, hit};

    #[tokio::test]
    async fn test_llm_intent_uses_raw_query_and_no_tools() {
        let harness = Harness::healthy();

        let envelope = respond(&harness.context, "what is 2+2", Some(Intent::Llm))
            .await
            .unwrap();

        assert_eq!(envelope.agent, AgentKind::LlmAgent);
        assert_eq!(envelope.intent, Some(Intent::Llm));
        assert!(envelope.tools_used.is_empty());
        assert_eq!(envelope.answer, "reply #0");
        assert_eq!(harness.calls(), vec![Call::Model("what is 2+2".to_string())]);
    }

    #[tokio::test]
    async fn test_search_intent_searches_then_prompts() {
        let harness = Harness::healthy();

        let envelope = respond(
            &harness.context,
            "current weather in Paris",
            Some(Intent::Search),
        )
        .await
        .unwrap();

        assert_eq!(envelope.agent, AgentKind::SearchAgent);
        assert!(envelope.used_search());

        let calls = harness.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Search("current weather in Paris".to_string()));
        match &calls[1] {
            Call::Model(prompt) => {
                assert!(prompt.contains("Search Results:\nsnippet one\nsnippet two"));
                assert!(prompt.contains("Question:\ncurrent weather in Paris"));
            }
            other => panic!("expected model call, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_research_intent_uses_research_prompt() {
        let harness = Harness::healthy();

        let envelope = respond(&harness.context, "explain tides", Some(Intent::Research))
            .await
            .unwrap();

        assert_eq!(envelope.agent, AgentKind::ResearchAgent);
        assert_eq!(envelope.intent, Some(Intent::Research));
        assert!(envelope.used_search());
        assert_eq!(harness.search_calls(), 1);

        let prompts = harness.model_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Research Data:\nsnippet one"));
        assert!(prompts[0].contains("Topic:\nexplain tides"));
    }

    #[tokio::test]
    async fn test_search_failure_degrades_to_empty_results() {
        let harness = Harness::new(None, None);

        let envelope = respond(&harness.context, "latest news", Some(Intent::Search))
            .await
            .unwrap();

        // 搜索确实被调用过，工具列表如实记录
        assert!(envelope.used_search());
        assert_eq!(harness.search_calls(), 1);
        assert!(harness.model_prompts()[0].contains("Search Results:\n\n\nQuestion:"));
    }

    #[tokio::test]
    async fn test_contentless_results_degrade_to_empty_section() {
        let harness = Harness::new(Some(vec![hit("")]), None);

        respond(&harness.context, "overview of rust", Some(Intent::Research))
            .await
            .unwrap();

        assert!(harness.model_prompts()[0].contains("Research Data:\n\n\nTopic:"));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let harness = Harness::new(Some(vec![hit("x")]), Some(0));

        let result = respond(&harness.context, "latest price", Some(Intent::Search)).await;

        assert!(result.is_err());
        assert_eq!(harness.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_unrecognised_intent_uses_fallback() {
        let harness = Harness::healthy();

        let envelope = respond(&harness.context, "hello", None).await.unwrap();

        assert_eq!(envelope.agent, AgentKind::FallbackAgent);
        assert_eq!(envelope.intent, None);
        assert!(envelope.tools_used.is_empty());
        assert_eq!(harness.calls(), vec![Call::Model("hello".to_string())]);
    }
}

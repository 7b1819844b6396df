//! 单元测试用的协作者替身

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::agent::context::AgentContext;
use crate::llm::LanguageModel;
use crate::search::{SearchHit, WebSearch};

/// 一次外部调用
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(String),
    Model(String),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

/// 按调用序号应答的模型替身，`fail_on` 指定第几次调用（从0开始）失败
pub struct ScriptedModel {
    log: CallLog,
    fail_on: Option<usize>,
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let mut log = self.log.lock().unwrap();
        let n = log.iter().filter(|c| matches!(c, Call::Model(_))).count();
        log.push(Call::Model(prompt.to_string()));
        if self.fail_on == Some(n) {
            return Err(anyhow!("model quota exceeded"));
        }
        Ok(format!("reply #{}", n))
    }
}

/// 搜索替身
pub struct StubSearch {
    log: CallLog,
    hits: Option<Vec<SearchHit>>,
}

#[async_trait]
impl WebSearch for StubSearch {
    async fn search(&self, query: &str, _max_results: usize) -> Result<Vec<SearchHit>> {
        self.log.lock().unwrap().push(Call::Search(query.to_string()));
        self.hits
            .clone()
            .ok_or_else(|| anyhow!("search provider unavailable"))
    }
}

pub fn hit(content: &str) -> SearchHit {
    SearchHit {
        content: Some(content.to_string()),
        ..Default::default()
    }
}

/// 测试夹具：共享调用日志的上下文
pub struct Harness {
    pub context: AgentContext,
    pub log: CallLog,
}

impl Harness {
    /// `hits` 为 `None` 表示搜索失败
    pub fn new(hits: Option<Vec<SearchHit>>, model_fail_on: Option<usize>) -> Self {
        let log: CallLog = Arc::default();
        let llm = ScriptedModel {
            log: log.clone(),
            fail_on: model_fail_on,
        };
        let search = StubSearch {
            log: log.clone(),
            hits,
        };
        let context = AgentContext::new(Arc::new(llm), Arc::new(search), 5);
        Self { context, log }
    }

    pub fn healthy() -> Self {
        Self::new(Some(vec![hit("snippet one"), hit("snippet two")]), None)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search(_)))
            .count()
    }

    pub fn model_prompts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Model(prompt) => Some(prompt),
                Call::Search(_) => None,
            })
            .collect()
    }
}

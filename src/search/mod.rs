//! 联网搜索协作者

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod tavily;

pub use tavily::TavilyClient;

/// 单条搜索结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// 联网搜索服务
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}

/// 按换行拼接各条结果的content，跳过没有内容的结果
pub fn join_contents(hits: &[SearchHit]) -> String {
    hits.iter()
        .filter_map(|hit| hit.content.as_deref())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// 查询意图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Llm,
    Search,
    Research,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Llm => "llm",
            Intent::Search => "search",
            Intent::Research => "research",
        }
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "llm" => Ok(Intent::Llm),
            "search" => Ok(Intent::Search),
            "research" => Ok(Intent::Research),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}

/// 实际处理请求的策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    LlmAgent,
    SearchAgent,
    ResearchAgent,
    FallbackAgent,
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AgentKind::LlmAgent => "llm_agent",
            AgentKind::SearchAgent => "search_agent",
            AgentKind::ResearchAgent => "research_agent",
            AgentKind::FallbackAgent => "fallback_agent",
        };
        f.write_str(name)
    }
}

/// 外部工具
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Search,
}

/// 统一的响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub answer: String,
    pub agent: AgentKind,
    /// `None` 表示意图无法识别，序列化为 "unknown"
    #[serde(with = "intent_label")]
    pub intent: Option<Intent>,
    pub tools_used: BTreeSet<ToolKind>,
}

impl ResponseEnvelope {
    pub fn used_search(&self) -> bool {
        self.tools_used.contains(&ToolKind::Search)
    }
}

mod intent_label {
    use super::Intent;
    use serde::{Deserialize, Deserializer, Serializer};

    const UNKNOWN: &str = "unknown";

    pub fn serialize<S: Serializer>(intent: &Option<Intent>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(intent.map(|i| i.as_str()).unwrap_or(UNKNOWN))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Intent>, D::Error> {
        let label = String::deserialize(d)?;
        Ok(label.parse().ok())
    }
}

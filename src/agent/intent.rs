//! 基于关键词的意图路由

use crate::agent::types::Intent;

/// 暗示实时信息的关键词
pub const SEARCH_KEYWORDS: &[&str] = &[
    "latest", "recent", "news", "today", "current", "update", "score", "match", "price",
    "weather",
];

/// 暗示需要深入讲解的关键词
pub const RESEARCH_KEYWORDS: &[&str] = &[
    "explain", "overview", "about", "research", "analysis", "study", "history", "impact",
    "future",
];

/// 按优先级排列的 (意图, 触发词) 规则表，search 必须排在 research 之前
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (Intent::Search, SEARCH_KEYWORDS),
    (Intent::Research, RESEARCH_KEYWORDS),
];

/// 对查询进行意图分类。子串匹配、不区分大小写，都不命中时返回 `Intent::Llm`
pub fn classify(query: &str) -> Intent {
    let q = query.to_lowercase();

    INTENT_RULES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|word| q.contains(word)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Llm)
}

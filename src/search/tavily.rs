//! Tavily 联网搜索客户端

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::SearchConfig;
use crate::search::{SearchHit, WebSearch};

/// 搜索请求体
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: usize,
}

/// 搜索响应体
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Tavily 客户端，进程内创建一次后在请求间复用
#[derive(Debug, Clone)]
pub struct TavilyClient {
    api_key: String,
    endpoint: String,
    client: reqwest::Client,
}

impl TavilyClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("agentflow/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build search http client")?;

        Ok(Self {
            api_key: config.api_key.clone(),
            endpoint: format!("{}/search", config.api_base_url.trim_end_matches('/')),
            client,
        })
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        debug!(endpoint = %self.endpoint, max_results, "sending search request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SearchRequest { query, max_results })
            .send()
            .await
            .context("search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("search provider returned {}: {}", status, body);
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to decode search response")?;
        debug!(results = parsed.results.len(), "search completed");
        Ok(parsed.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalises_trailing_slash() {
        let config = SearchConfig {
            api_key: "tvly-test".to_string(),
            api_base_url: "https://search.example.com/".to_string(),
            max_results: 5,
            timeout_seconds: 5,
        };

        let client = TavilyClient::new(&config).unwrap();
        assert_eq!(client.endpoint, "https://search.example.com/search");
    }

    #[test]
    fn test_response_tolerates_partial_results() {
        let body = r#"{
            "query": "weather",
            "results": [
                {"title": "Paris", "url": "https://a", "content": "Sunny, 21C", "score": 0.9},
                {"title": "No content", "url": "https://b"}
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].content.as_deref(), Some("Sunny, 21C"));
        assert!(parsed.results[1].content.is_none());
    }

    #[test]
    fn test_response_without_results_field() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }
}

//! LLM客户端 - 基于rig的统一模型调用

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::LLMConfig;
use crate::llm::LanguageModel;

mod providers;

use providers::ProviderClient;

/// LLM客户端，进程内创建一次后在请求间复用
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)
            .context(format!("Failed to build {} client", config.provider))?;
        Ok(Self { client, config })
    }

    /// 检查模型连接是否正常
    pub async fn check_connection(&self) -> Result<()> {
        info!("🔄 正在检查模型连接...");
        match self.invoke("Say hello in one sentence.").await {
            Ok(_) => {
                info!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                error!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl LanguageModel for LLMClient {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let agent = self.client.create_agent(&self.config);
        let timeout = Duration::from_secs(self.config.timeout_seconds);

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "invoking model"
        );

        tokio::time::timeout(timeout, agent.prompt(prompt))
            .await
            .map_err(|_| {
                anyhow!(
                    "model call timed out after {}s",
                    self.config.timeout_seconds
                )
            })?
    }
}

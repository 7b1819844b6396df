use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::agent::pipeline::run_agentic_flow;
use crate::agent::responder::respond;
use crate::agent::{AgentContext, Intent, classify};
use crate::cli::Command;
use crate::config::Config;
use crate::llm::LLMClient;
use crate::search::TavilyClient;

/// 校验配置、构建协作者并执行子命令
pub async fn launch(config: &Config, command: Command) -> Result<()> {
    // 缺少密钥时在启动阶段直接失败
    config.validate()?;

    let llm = LLMClient::new(config.llm.clone())?;
    if config.check_connection {
        llm.check_connection().await?;
    }
    let search = TavilyClient::new(&config.search)?;

    info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        max_results = config.search.max_results,
        "collaborators ready"
    );
    let context = AgentContext::new(Arc::new(llm), Arc::new(search), config.search.max_results);

    match command {
        Command::Serve => crate::server::serve(context, &config.bind_address()).await,
        Command::Ask { query, intent } => {
            let intent = match intent {
                Some(label) => label
                    .parse::<Intent>()
                    .inspect_err(|e| warn!("⚠️ {}", e))
                    .ok(),
                None => Some(classify(&query)),
            };
            let envelope = respond(&context, &query, intent).await?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Ok(())
        }
        Command::Research { query } => {
            let answer = run_agentic_flow(&context, &query).await?;
            println!("{}", answer);
            Ok(())
        }
    }
}

use crate::config::{Config, LLMProvider};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AgentFlow - 基于意图路由的智能问答后端
#[derive(Parser, Debug)]
#[command(name = "agentflow")]
#[command(
    about = "Agentic chat backend: routes each query to a direct LLM answer, a web-search-augmented answer, or a research -> plan -> write pipeline."
)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 启动时检查模型连接
    #[arg(long, global = true)]
    pub check_connection: bool,

    /// LLM Provider (openai, deepseek, mistral, anthropic, ollama)
    #[arg(long, global = true)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long, global = true)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long, global = true)]
    pub llm_api_base_url: Option<String>,

    /// 模型标识
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    /// 搜索服务 API KEY
    #[arg(long, global = true)]
    pub search_api_key: Option<String>,

    /// 每次搜索返回的最大结果数
    #[arg(long, global = true)]
    pub max_results: Option<usize>,

    /// 监听地址
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// 监听端口
    #[arg(long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// 启动HTTP服务（默认）
    Serve,
    /// 回答一次查询并输出响应信封
    Ask {
        query: String,
        /// 跳过分类，强制使用指定意图 (llm, search, research)
        #[arg(long)]
        intent: Option<String>,
    },
    /// 执行一次 research → plan → write 流水线并输出最终回答
    Research { query: String },
}

impl Args {
    /// 子命令，未指定时为 serve
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// 将CLI参数转换为配置，命令行参数覆盖配置文件
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        // 覆盖LLM配置
        if let Some(provider_str) = &self.llm_provider {
            config.llm.provider = provider_str.parse::<LLMProvider>()?;
        }
        if let Some(llm_api_key) = &self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(llm_api_base_url) = &self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 搜索配置
        if let Some(search_api_key) = &self.search_api_key {
            config.search.api_key = search_api_key.clone();
        }
        if let Some(max_results) = self.max_results {
            config.search.max_results = max_results;
        }

        // 服务配置
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        // 开关只打开，不关闭配置文件中的设置
        config.verbose |= self.verbose;
        config.check_connection |= self.check_connection;

        Ok(config)
    }
}

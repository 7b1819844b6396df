use std::sync::Arc;

use crate::llm::LanguageModel;
use crate::search::WebSearch;

/// 请求处理上下文，持有各协作者句柄。进程内构建一次，请求间只读共享
#[derive(Clone)]
pub struct AgentContext {
    /// 语言模型
    pub llm: Arc<dyn LanguageModel>,
    /// 联网搜索
    pub search: Arc<dyn WebSearch>,
    /// 每次搜索的最大结果数
    pub max_results: usize,
}

impl AgentContext {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        search: Arc<dyn WebSearch>,
        max_results: usize,
    ) -> Self {
        Self {
            llm,
            search,
            max_results,
        }
    }
}

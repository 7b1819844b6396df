//! 各策略与各阶段的prompt模板

/// Prompt模板配置
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// 开头的说明性指令
    pub opening_instruction: &'static str,
    /// 结尾的强调性指令，可为空
    pub closing_instruction: &'static str,
}

impl PromptTemplate {
    /// 按 "开头指令 / 各个带标题的材料段 / 结尾指令" 的顺序拼装prompt
    pub fn render(&self, sections: &[(&str, &str)]) -> String {
        let mut prompt = String::new();
        prompt.push_str(self.opening_instruction);
        prompt.push_str("\n\n");

        for (title, content) in sections {
            prompt.push_str(&format!("{}:\n{}\n\n", title, content));
        }

        if !self.closing_instruction.is_empty() {
            prompt.push_str(self.closing_instruction);
            prompt.push('\n');
        }

        prompt
    }
}

pub const SEARCH_ANSWER: PromptTemplate = PromptTemplate {
    opening_instruction:
        "Based on the following web search results, answer the question clearly.",
    closing_instruction: "",
};

pub const RESEARCH_ANSWER: PromptTemplate = PromptTemplate {
    opening_instruction:
        "Use the following information to provide a clear and complete explanation.",
    closing_instruction: "",
};

pub const RESEARCH_STAGE: PromptTemplate = PromptTemplate {
    opening_instruction: "You are a research-focused AI agent.",
    closing_instruction: "Task:\n\
        Extract the most important, accurate, and relevant insights.\n\
        Avoid repetition. Be concise and informative.",
};

pub const PLAN_STAGE: PromptTemplate = PromptTemplate {
    opening_instruction: "You are a planning AI agent.",
    closing_instruction: "Task:\n\
        Break this information into clear, logical sections or steps.\n\
        Use bullet points or numbered steps.\n\
        Keep it structured and concise.",
};

pub const WRITE_STAGE: PromptTemplate = PromptTemplate {
    opening_instruction: "You are a writer AI agent.",
    closing_instruction: "Task:\n\
        Convert this into a clear, well-written explanation.\n\
        Use headings and short paragraphs.\n\
        Keep the tone professional and easy to understand.",
};

pub fn search_answer(search_results: &str, query: &str) -> String {
    SEARCH_ANSWER.render(&[("Search Results", search_results), ("Question", query)])
}

pub fn research_answer(research_data: &str, query: &str) -> String {
    RESEARCH_ANSWER.render(&[("Research Data", research_data), ("Topic", query)])
}

pub fn research_stage(query: &str, web_data: &str) -> String {
    RESEARCH_STAGE.render(&[("User Query", query), ("Web Data", web_data)])
}

pub fn plan_stage(research: &str) -> String {
    PLAN_STAGE.render(&[("Research Information", research)])
}

pub fn write_stage(plan: &str) -> String {
    WRITE_STAGE.render(&[("Structured Plan", plan)])
}

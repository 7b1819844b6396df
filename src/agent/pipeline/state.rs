use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 流水线状态错误
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("pipeline field `{0}` has not been written yet")]
    MissingInput(StateField),
    #[error("pipeline field `{0}` was already written")]
    FieldAlreadyWritten(StateField),
}

/// 状态字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    Query,
    Research,
    Plan,
    Answer,
}

impl Display for StateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StateField::Query => "query",
            StateField::Research => "research",
            StateField::Plan => "plan",
            StateField::Answer => "answer",
        };
        f.write_str(name)
    }
}

/// research → plan → write 流水线的状态。
///
/// 每个字段只写一次；阶段之间传递的是新值，不会原地修改上一阶段的状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineState {
    pub query: String,
    pub research: Option<String>,
    pub plan: Option<String>,
    pub answer: Option<String>,
}

impl PipelineState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            research: None,
            plan: None,
            answer: None,
        }
    }

    fn slot(&self, field: StateField) -> Option<&String> {
        match field {
            StateField::Query => Some(&self.query),
            StateField::Research => self.research.as_ref(),
            StateField::Plan => self.plan.as_ref(),
            StateField::Answer => self.answer.as_ref(),
        }
    }

    /// 读取字段，未写入时报错
    pub fn read(&self, field: StateField) -> Result<&str, PipelineError> {
        self.slot(field)
            .map(String::as_str)
            .ok_or(PipelineError::MissingInput(field))
    }

    /// 字段尚未写入时返回 Ok
    pub fn ensure_unwritten(&self, field: StateField) -> Result<(), PipelineError> {
        match self.slot(field) {
            Some(_) => Err(PipelineError::FieldAlreadyWritten(field)),
            None => Ok(()),
        }
    }

    /// 返回写入了 `field` 的新状态，字段已写入时报错
    pub fn with(&self, field: StateField, value: String) -> Result<Self, PipelineError> {
        self.ensure_unwritten(field)?;

        let mut next = self.clone();
        match field {
            StateField::Query => return Err(PipelineError::FieldAlreadyWritten(field)),
            StateField::Research => next.research = Some(value),
            StateField::Plan => next.plan = Some(value),
            StateField::Answer => next.answer = Some(value),
        }
        Ok(next)
    }

    pub fn is_complete(&self) -> bool {
        self.research.is_some() && self.plan.is_some() && self.answer.is_some()
    }
}

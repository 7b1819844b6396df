pub mod context;
pub mod intent;
pub mod pipeline;
pub mod prompts;
pub mod responder;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::AgentContext;
pub use intent::classify;
pub use service::handle_query;
pub use types::{AgentKind, Intent, ResponseEnvelope, ToolKind};

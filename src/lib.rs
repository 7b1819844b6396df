pub mod agent;
pub mod app;
pub mod cli;
pub mod config;
pub mod llm;
pub mod search;
pub mod server;

// Re-export commonly used types
pub use agent::{AgentContext, ResponseEnvelope, handle_query};
pub use app::launch;
pub use config::Config;

//! Orchestration services for the agent directory.

mod directory;

pub use directory::{
    AgentDirectory, DEFAULT_AGENT, DEFAULT_AGENT_CONFIG, DEFAULT_TARGET_LANGS, DirectoryError,
    DirectoryResult,
};

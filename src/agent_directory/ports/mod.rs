//! Port contracts for the agent directory.

mod factory;

pub use factory::{AgentBuildError, FactoryResult, TranscoderFactory};

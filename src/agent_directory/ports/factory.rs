//! Factory port for building speech-translation agents.

use crate::agent_directory::domain::TranscoderHandle;
use std::sync::Arc;
use thiserror::Error;

/// Result type for factory operations.
pub type FactoryResult<T> = Result<T, AgentBuildError>;

/// Construction contract for the external inference framework.
///
/// Implementations load model artifacts and assemble a runnable
/// transcoder for a model identifier, optionally under a named
/// configuration profile. Construction cost, resource footprint, and
/// failure modes are entirely the implementation's concern.
pub trait TranscoderFactory: Send + Sync {
    /// Builds an agent for `model_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentBuildError`] when the model cannot be constructed,
    /// typically because its artifacts are missing.
    fn build_agent(
        &self,
        model_id: &str,
        config_name: Option<&str>,
    ) -> FactoryResult<TranscoderHandle>;
}

/// Error raised when the inference framework fails to build an agent.
#[derive(Debug, Clone, Error)]
#[error("failed to build agent '{model_id}': {cause}")]
pub struct AgentBuildError {
    model_id: String,
    cause: Arc<dyn std::error::Error + Send + Sync>,
}

impl AgentBuildError {
    /// Wraps an underlying construction failure for `model_id`.
    pub fn new(
        model_id: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            cause: Arc::new(cause),
        }
    }

    /// Returns the model identifier that failed to build.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

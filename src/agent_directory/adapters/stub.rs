//! Stub transcoder factory for tests and model-less deployments.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::agent_directory::{
    domain::{Transcoder, TranscoderHandle},
    ports::{AgentBuildError, FactoryResult, TranscoderFactory},
};

/// Transcoder stand-in that records how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTranscoder {
    model_id: String,
    config_name: Option<String>,
}

impl StubTranscoder {
    /// Creates a stand-alone stub for `model_id` with no configuration
    /// profile.
    #[must_use]
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            config_name: None,
        }
    }

    /// Returns the configuration profile the stub was built with.
    #[must_use]
    pub fn config_name(&self) -> Option<&str> {
        self.config_name.as_deref()
    }
}

impl Transcoder for StubTranscoder {
    fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Error returned for model identifiers the stub factory is primed to
/// fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("model artifacts not found for '{0}'")]
pub struct MissingModelArtifacts(pub String);

/// Record of one build request observed by the stub factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Requested model identifier.
    pub model_id: String,
    /// Requested configuration profile, if any.
    pub config_name: Option<String>,
}

/// Thread-safe in-memory transcoder factory.
///
/// Builds [`StubTranscoder`] handles instead of loading model artifacts,
/// records every build request in order, and can be primed to fail for
/// specific model identifiers.
#[derive(Debug, Clone, Default)]
pub struct StubTranscoderFactory {
    state: Arc<RwLock<StubFactoryState>>,
}

#[derive(Debug, Default)]
struct StubFactoryState {
    failing_models: HashSet<String>,
    build_requests: Vec<BuildRequest>,
}

impl StubTranscoderFactory {
    /// Creates a factory that builds every requested model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primes the factory to fail for `model_id`.
    #[must_use]
    pub fn with_failure(self, model_id: impl Into<String>) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .failing_models
            .insert(model_id.into());
        self
    }

    /// Returns every build request seen so far, in order.
    #[must_use]
    pub fn build_requests(&self) -> Vec<BuildRequest> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .build_requests
            .clone()
    }
}

impl TranscoderFactory for StubTranscoderFactory {
    fn build_agent(
        &self,
        model_id: &str,
        config_name: Option<&str>,
    ) -> FactoryResult<TranscoderHandle> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.build_requests.push(BuildRequest {
            model_id: model_id.to_owned(),
            config_name: config_name.map(str::to_owned),
        });

        if state.failing_models.contains(model_id) {
            return Err(AgentBuildError::new(
                model_id,
                MissingModelArtifacts(model_id.to_owned()),
            ));
        }

        Ok(Arc::new(StubTranscoder {
            model_id: model_id.to_owned(),
            config_name: config_name.map(str::to_owned),
        }))
    }
}

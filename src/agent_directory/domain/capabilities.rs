//! Capability metadata advertised for each registered agent.

use super::DynamicParam;
use serde::{Deserialize, Serialize};

/// Describes what a registered speech-translation agent can do.
///
/// Capability metadata reaches clients verbatim through
/// [`CapabilityRecord`], so field contents follow what the streaming
/// client protocol expects: modality tags such as `s2t`/`s2s` and
/// three-letter target language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCapabilities {
    description: String,
    modalities: Vec<String>,
    target_langs: Vec<String>,
    dynamic_params: Vec<DynamicParam>,
}

impl AgentCapabilities {
    /// Creates capabilities with the given modalities and target languages.
    ///
    /// `description` defaults to an empty string and `dynamic_params`
    /// defaults to an empty list. Modalities and target languages should
    /// be non-empty in practice; the directory does not enforce this.
    #[must_use]
    pub fn new(
        modalities: impl IntoIterator<Item = String>,
        target_langs: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            description: String::new(),
            modalities: modalities.into_iter().collect(),
            target_langs: target_langs.into_iter().collect(),
            dynamic_params: Vec::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the runtime-tunable parameters the agent honours.
    #[must_use]
    pub fn with_dynamic_params(
        mut self,
        params: impl IntoIterator<Item = DynamicParam>,
    ) -> Self {
        self.dynamic_params = params.into_iter().collect();
        self
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the supported modalities in declaration order.
    #[must_use]
    pub fn modalities(&self) -> &[String] {
        &self.modalities
    }

    /// Returns the supported target language codes in declaration order.
    #[must_use]
    pub fn target_langs(&self) -> &[String] {
        &self.target_langs
    }

    /// Returns the supported dynamic parameters in declaration order.
    #[must_use]
    pub fn dynamic_params(&self) -> &[DynamicParam] {
        &self.dynamic_params
    }
}

/// Wire-facing capability projection for one registered agent.
///
/// This is the only representation of an agent that crosses the service
/// boundary. It serialises with exactly the keys the advertisement
/// endpoint publishes: `name`, `description`, `modalities`,
/// `targetLangs`, `dynamicParams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRecord {
    /// Agent name used for lookups.
    pub name: String,
    /// Free-text model description.
    pub description: String,
    /// Supported modalities.
    pub modalities: Vec<String>,
    /// Supported target language codes.
    pub target_langs: Vec<String>,
    /// Runtime-tunable parameters the agent honours.
    pub dynamic_params: Vec<DynamicParam>,
}

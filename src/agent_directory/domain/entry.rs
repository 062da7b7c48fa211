//! Directory entry wrapping one built agent with its metadata.

use super::{AgentCapabilities, CapabilityRecord, TranscoderHandle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;

/// One registered agent: a built transcoder handle plus the metadata the
/// directory advertises for it.
///
/// Entries are immutable after construction and live until process
/// teardown. Name uniqueness is a convention, not an invariant; under
/// duplicates, lookups reach only the first entry added.
#[derive(Clone)]
pub struct AgentEntry {
    name: String,
    capabilities: AgentCapabilities,
    transcoder: TranscoderHandle,
    registered_at: DateTime<Utc>,
}

impl AgentEntry {
    /// Creates an entry for a built transcoder.
    #[must_use]
    pub fn new(
        transcoder: TranscoderHandle,
        name: impl Into<String>,
        capabilities: AgentCapabilities,
        clock: &impl Clock,
    ) -> Self {
        Self {
            name: name.into(),
            capabilities,
            transcoder,
            registered_at: clock.utc(),
        }
    }

    /// Returns the agent name used for lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the advertised capability metadata.
    #[must_use]
    pub const fn capabilities(&self) -> &AgentCapabilities {
        &self.capabilities
    }

    /// Returns a shared handle to the built transcoder.
    #[must_use]
    pub fn transcoder(&self) -> TranscoderHandle {
        Arc::clone(&self.transcoder)
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Projects the entry into its wire-facing capability record.
    #[must_use]
    pub fn capability_record(&self) -> CapabilityRecord {
        CapabilityRecord {
            name: self.name.clone(),
            description: self.capabilities.description().to_owned(),
            modalities: self.capabilities.modalities().to_vec(),
            target_langs: self.capabilities.target_langs().to_vec(),
            dynamic_params: self.capabilities.dynamic_params().to_vec(),
        }
    }
}

impl fmt::Debug for AgentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentEntry")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}

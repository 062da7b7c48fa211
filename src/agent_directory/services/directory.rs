//! Population and lookup service for the agent directory.
//!
//! Provides [`AgentDirectory`], which performs one-time idempotent
//! population (from a JSON model roster override or from the built-in
//! default agent) and answers name lookups and capability queries.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use thiserror::Error;
use tracing::{error, warn};

use crate::agent_directory::{
    domain::{
        AgentCapabilities, AgentEntry, CapabilityRecord, DynamicParam, ModelRosterEntry,
        RosterParseError, TranscoderHandle,
    },
    ports::{AgentBuildError, TranscoderFactory},
};

/// Model identifier of the built-in default agent. Doubles as the name
/// of the directory holding the model artifacts.
pub const DEFAULT_AGENT: &str = "SeamlessStreaming";

/// Configuration profile used to build the default agent.
pub const DEFAULT_AGENT_CONFIG: &str = "vad_s2st_sc_24khz_main.yaml";

/// Description advertised for the default agent.
const DEFAULT_AGENT_DESCRIPTION: &str = "multilingual expressive model that supports S2S and S2T";

/// Modalities advertised for the default agent.
const DEFAULT_AGENT_MODALITIES: [&str; 2] = ["s2t", "s2s"];

/// Target languages supported by the default streaming agent.
#[rustfmt::skip]
pub const DEFAULT_TARGET_LANGS: [&str; 36] = [
    "eng",
    "arb", "ben", "cat", "ces", "cmn", "cym", "dan",
    "deu", "est", "fin", "fra", "hin", "ind", "ita",
    "jpn", "kor", "mlt", "nld", "pes", "pol", "por",
    "ron", "rus", "slk", "spa", "swe", "swh", "tel",
    "tgl", "tha", "tur", "ukr", "urd", "uzn", "vie",
];

/// Service-level errors for directory population and lookup.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The model roster override could not be parsed.
    #[error(transparent)]
    Roster(#[from] RosterParseError),

    /// The inference framework failed to build an agent.
    #[error(transparent)]
    Build(#[from] AgentBuildError),

    /// No registered agent carries the requested name.
    #[error("no agent found with name: {0}")]
    NoAvailableAgent(String),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Registry of built agents, keyed by name, populated once at startup.
///
/// The directory is an explicit context object owned by the service
/// lifecycle rather than process-global state. The check-and-populate
/// step runs under the state write lock, so a concurrent second call
/// observes either the lock or the populated flag, never a half-built
/// list. Lookups take the read lock and may run concurrently.
pub struct AgentDirectory<F, C>
where
    F: TranscoderFactory,
    C: Clock + Send + Sync,
{
    factory: Arc<F>,
    clock: Arc<C>,
    state: Arc<RwLock<DirectoryState>>,
}

impl<F, C> Clone for AgentDirectory<F, C>
where
    F: TranscoderFactory,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

#[derive(Default)]
struct DirectoryState {
    agents: Vec<AgentEntry>,
    populated: bool,
}

impl<F, C> AgentDirectory<F, C>
where
    F: TranscoderFactory,
    C: Clock + Send + Sync,
{
    /// Creates an empty, unpopulated directory.
    #[must_use]
    pub fn new(factory: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            factory,
            clock,
            state: Arc::new(RwLock::new(DirectoryState::default())),
        }
    }

    /// Appends an agent entry.
    ///
    /// Names are not checked for uniqueness; under duplicates, lookups
    /// return the first entry added.
    pub fn add_agent(&self, entry: AgentEntry) {
        self.write_state().agents.push(entry);
    }

    /// Builds an agent through the inference framework.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Build`] when construction fails. The
    /// failure is logged at warning severity before it propagates.
    pub fn build_agent(
        &self,
        model_id: &str,
        config_name: Option<&str>,
    ) -> DirectoryResult<TranscoderHandle> {
        self.factory
            .build_agent(model_id, config_name)
            .map_err(|err| {
                warn!("Failed to build agent {}: {}", model_id, err);
                err.into()
            })
    }

    /// Populates the directory exactly once.
    ///
    /// With a roster override, every named model is built without a
    /// configuration profile and added in roster order; any
    /// `description` or `dynamicParams` in the override is ignored and
    /// the corresponding metadata defaults to empty. Without an
    /// override, the built-in default agent is built under its fixed
    /// configuration profile and added with its fixed metadata.
    ///
    /// Calling this again after a completed population is a silent
    /// no-op. A population that added no agents is valid: it is logged
    /// at error severity and the directory stays empty.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Roster`] when the override is not valid
    /// JSON or an entry is missing a required field, and
    /// [`DirectoryError::Build`] when the framework fails to build any
    /// requested agent. On error nothing from this call is added and the
    /// directory remains unpopulated.
    pub fn populate(&self, models_override: Option<&str>) -> DirectoryResult<()> {
        let mut state = self.write_state();
        if state.populated {
            return Ok(());
        }

        let staged = match models_override {
            Some(roster_json) => self.build_from_roster(roster_json)?,
            None => vec![self.build_default_agent()?],
        };
        state.agents.extend(staged);

        if state.agents.is_empty() {
            error!(
                "No agents were loaded. This likely means the model artifacts \
                 for the requested models are missing."
            );
        }

        state.populated = true;
        Ok(())
    }

    /// Returns whether population has completed.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.read_state().populated
    }

    /// Returns the number of registered agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.read_state().agents.len()
    }

    /// Returns a snapshot of every entry in registration order.
    #[must_use]
    pub fn entries(&self) -> Vec<AgentEntry> {
        self.read_state().agents.clone()
    }

    /// Looks up an agent handle by name.
    ///
    /// Returns `None` when no agent carries the name. Under duplicate
    /// names the first entry added wins.
    #[must_use]
    pub fn get_agent(&self, name: &str) -> Option<TranscoderHandle> {
        self.read_state()
            .agents
            .iter()
            .find(|entry| entry.name() == name)
            .map(AgentEntry::transcoder)
    }

    /// Looks up an agent handle by name, failing on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NoAvailableAgent`] when no agent
    /// carries the name.
    pub fn get_agent_or_error(&self, name: &str) -> DirectoryResult<TranscoderHandle> {
        self.get_agent(name)
            .ok_or_else(|| DirectoryError::NoAvailableAgent(name.to_owned()))
    }

    /// Returns the capability record of every agent in registration
    /// order.
    #[must_use]
    pub fn capabilities_list(&self) -> Vec<CapabilityRecord> {
        self.read_state()
            .agents
            .iter()
            .map(AgentEntry::capability_record)
            .collect()
    }

    fn build_from_roster(&self, roster_json: &str) -> DirectoryResult<Vec<AgentEntry>> {
        let roster = ModelRosterEntry::parse_roster(roster_json)?;
        let mut staged = Vec::with_capacity(roster.len());
        for requested in roster {
            let handle = self.build_agent(&requested.name, None)?;
            let capabilities = AgentCapabilities::new(requested.modalities, requested.target_langs);
            staged.push(AgentEntry::new(
                handle,
                requested.name,
                capabilities,
                &*self.clock,
            ));
        }
        Ok(staged)
    }

    fn build_default_agent(&self) -> DirectoryResult<AgentEntry> {
        let handle = self.build_agent(DEFAULT_AGENT, Some(DEFAULT_AGENT_CONFIG))?;
        let capabilities = AgentCapabilities::new(
            DEFAULT_AGENT_MODALITIES.map(str::to_owned),
            DEFAULT_TARGET_LANGS.map(str::to_owned),
        )
        .with_description(DEFAULT_AGENT_DESCRIPTION)
        .with_dynamic_params([DynamicParam::Expressive]);
        Ok(AgentEntry::new(
            handle,
            DEFAULT_AGENT,
            capabilities,
            &*self.clock,
        ))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, DirectoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DirectoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Shared world state for agent directory BDD scenarios.

use std::sync::Arc;

use dragoman::agent_directory::{
    adapters::stub::StubTranscoderFactory,
    services::{AgentDirectory, DirectoryResult},
};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;

/// Directory type used by the BDD world.
pub type TestDirectory = AgentDirectory<StubTranscoderFactory, DefaultClock>;

/// One roster model queued for population.
pub struct RosterModel {
    /// Model identifier.
    pub name: String,
    /// Target language code.
    pub target_lang: String,
}

/// Scenario world for agent directory behaviour tests.
pub struct DirectoryWorld {
    /// The directory under test.
    pub directory: TestDirectory,
    /// Roster models queued for population.
    pub roster: Vec<RosterModel>,
    /// Result of the last population attempt made with a raw override.
    pub last_populate_result: Option<DirectoryResult<()>>,
}

impl DirectoryWorld {
    /// Creates a world with an empty roster and an unpopulated directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: AgentDirectory::new(
                Arc::new(StubTranscoderFactory::new()),
                Arc::new(DefaultClock),
            ),
            roster: Vec::new(),
            last_populate_result: None,
        }
    }

    /// Renders the queued roster as the JSON override string.
    #[must_use]
    pub fn roster_json(&self) -> String {
        let models: Vec<_> = self
            .roster
            .iter()
            .map(|model| {
                json!({
                    "name": model.name,
                    "modalities": ["s2t", "s2s"],
                    "targetLangs": [model.target_lang],
                })
            })
            .collect();
        json!(models).to_string()
    }
}

impl Default for DirectoryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DirectoryWorld {
    DirectoryWorld::default()
}

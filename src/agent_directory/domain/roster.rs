//! Model roster parsing for startup overrides.

use super::RosterParseError;
use serde::Deserialize;

/// One requested model from the startup override roster.
///
/// The roster is a JSON array of objects, e.g.
/// `[{"name":"m1","modalities":["s2t"],"targetLangs":["eng"]}]`. Unknown
/// keys are ignored; in particular a `description` or `dynamicParams`
/// supplied here is not carried onto the built agent, whose metadata
/// defaults those fields to empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRosterEntry {
    /// Model identifier, handed to the inference framework as-is.
    pub name: String,
    /// Modalities the model is advertised with.
    pub modalities: Vec<String>,
    /// Target language codes the model is advertised with.
    pub target_langs: Vec<String>,
}

impl ModelRosterEntry {
    /// Parses a roster from its JSON string form.
    ///
    /// An empty array parses to an empty roster without error.
    ///
    /// # Errors
    ///
    /// Returns [`RosterParseError`] when the string is not valid JSON or
    /// an entry is missing one of `name`, `modalities`, `targetLangs`.
    pub fn parse_roster(config: &str) -> Result<Vec<Self>, RosterParseError> {
        Ok(serde_json::from_str(config)?)
    }
}

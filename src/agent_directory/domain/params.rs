//! Runtime-tunable parameter vocabulary.

use super::ParseDynamicParamError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime-tunable option recognised by the streaming client protocol.
///
/// Dynamic parameters are advertised per agent so clients only surface
/// the controls a model actually honours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicParam {
    /// The agent can vary expressive vocal style in generated speech.
    Expressive,
}

impl DynamicParam {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expressive => "expressive",
        }
    }
}

impl fmt::Display for DynamicParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DynamicParam {
    type Error = ParseDynamicParamError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "expressive" => Ok(Self::Expressive),
            _ => Err(ParseDynamicParamError(value.to_owned())),
        }
    }
}

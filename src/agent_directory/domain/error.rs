//! Error types for agent directory domain parsing.

use thiserror::Error;

/// Error returned when a model roster cannot be parsed.
///
/// Covers both malformed JSON and roster entries missing a required
/// field.
#[derive(Debug, Error)]
#[error("invalid model roster JSON: {0}")]
pub struct RosterParseError(#[from] pub serde_json::Error);

/// Error returned while parsing a dynamic parameter tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dynamic parameter: {0}")]
pub struct ParseDynamicParamError(pub String);

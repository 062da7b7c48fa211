//! Domain model for the speech-translation agent directory.
//!
//! The domain models capability metadata, the wire-facing capability
//! record, the model roster supplied as a startup override, and the
//! opaque transcoder handle. All infrastructure concerns are kept
//! outside the domain boundary.

mod capabilities;
mod entry;
mod error;
mod params;
mod roster;
mod transcoder;

pub use capabilities::{AgentCapabilities, CapabilityRecord};
pub use entry::AgentEntry;
pub use error::{ParseDynamicParamError, RosterParseError};
pub use params::DynamicParam;
pub use roster::ModelRosterEntry;
pub use transcoder::{Transcoder, TranscoderHandle};

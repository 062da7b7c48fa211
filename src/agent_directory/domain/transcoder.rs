//! Opaque handle contract for runnable speech-translation agents.

use std::sync::Arc;

/// Runnable speech-translation agent produced by the inference framework.
///
/// The directory builds and indexes transcoders but never drives them;
/// audio chunking, incremental decoding, and session state belong to the
/// embedding service.
pub trait Transcoder: Send + Sync {
    /// Returns the model identifier this transcoder was built from.
    fn model_id(&self) -> &str;
}

/// Shared handle to a [`Transcoder`].
///
/// Directory entries own a handle; lookups hand out clones.
pub type TranscoderHandle = Arc<dyn Transcoder>;

//! Synthesis engines backing the XTTS model.
//!
//! Provides the loader/engine traits and the local backend driving the
//! Coqui `tts` command.

mod command;
mod types;

pub use command::{CommandBackend, CommandEngine};
pub use types::{EngineError, SynthesisRequest};

/// Identifier of the pretrained multilingual voice-cloning model.
pub const XTTS_V2_MODEL: &str = "tts_models/multilingual/multi-dataset/xtts_v2";

/// Loads a pretrained model and hands back a ready engine.
///
/// Allows for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait EngineLoader {
    /// Load the model identified by `model_name`.
    fn load(&self, model_name: &str) -> Result<Box<dyn Synthesizer>, EngineError>;
}

/// A loaded model and its inference routine.
#[cfg_attr(test, mockall::automock)]
pub trait Synthesizer: Send + Sync {
    /// Identifier of the loaded model.
    fn model_name(&self) -> &str;

    /// Synthesize `request.text` in the voice of `request.speaker_wav`
    /// and write the audio to `request.file_path`.
    fn synthesize(&self, request: &SynthesisRequest) -> Result<(), EngineError>;
}

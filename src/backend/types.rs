//! Backend request types and errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or running a synthesis engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// Named parameters of a synthesize-to-file call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    /// Reference sample the voice is cloned from.
    pub speaker_wav: PathBuf,
    pub language: String,
    /// Destination of the synthesized audio.
    pub file_path: PathBuf,
}

impl SynthesisRequest {
    /// Create a new synthesis request.
    pub fn new(
        text: impl Into<String>,
        speaker_wav: impl Into<PathBuf>,
        language: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            text: text.into(),
            speaker_wav: speaker_wav.into(),
            language: language.into(),
            file_path: file_path.into(),
        }
    }
}

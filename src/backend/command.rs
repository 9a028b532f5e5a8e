//! Local backend driving the Coqui `tts` command-line tool.

use std::io;
use std::process::{Command, Stdio};

use log::{debug, info};

use super::types::{EngineError, SynthesisRequest};
use super::{EngineLoader, Synthesizer};

/// Loader that binds a model to the Coqui TTS command.
pub struct CommandBackend {
    program: String,
}

impl CommandBackend {
    /// Create a backend that runs `program` (e.g. `tts`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Get the program this backend runs.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl EngineLoader for CommandBackend {
    fn load(&self, model_name: &str) -> Result<Box<dyn Synthesizer>, EngineError> {
        // The tool loads the weights itself on each run.
        Ok(Box::new(CommandEngine::new(self.program.clone(), model_name)))
    }
}

/// A model run through one invocation of the TTS command.
pub struct CommandEngine {
    program: String,
    model_name: String,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            model_name: model_name.into(),
        }
    }

    /// Build the command line for a request.
    pub fn command(&self, request: &SynthesisRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--model_name")
            .arg(&self.model_name)
            .arg("--text")
            .arg(&request.text)
            .arg("--speaker_wav")
            .arg(&request.speaker_wav)
            .arg("--language_idx")
            .arg(&request.language)
            .arg("--out_path")
            .arg(&request.file_path);
        cmd
    }
}

impl Synthesizer for CommandEngine {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn synthesize(&self, request: &SynthesisRequest) -> Result<(), EngineError> {
        let mut cmd = self.command(request);

        // stdout belongs to the invoker; engine chatter goes to stderr.
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit());

        info!("Running {} with {}", self.program, self.model_name);
        debug!("{cmd:?}");

        let status = cmd.status().map_err(|source| EngineError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(EngineError::CommandFailed {
                program: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

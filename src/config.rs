//! Engine program selection from the process environment.

use log::debug;

use crate::backend::{CommandBackend, EngineLoader};

/// Overrides the TTS program, e.g. one inside a virtualenv.
pub const COMMAND_VAR: &str = "XTTS_TTS_COMMAND";

const DEFAULT_COMMAND: &str = "tts";

/// Which Coqui TTS program runs the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub program: String,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let program = lookup(COMMAND_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

        Self { program }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_COMMAND.to_string(),
        }
    }
}

/// Create the engine loader for a config.
pub fn create_loader(config: &EngineConfig) -> Box<dyn EngineLoader> {
    debug!("Engine program: {}", config.program);
    Box::new(CommandBackend::new(config.program.clone()))
}

//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Clone a voice from a reference sample and speak text with it.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "xtts-clone")]
#[command(about = "Voice cloning text-to-speech using the XTTS v2 multilingual model")]
#[command(version)]
pub struct Args {
    /// Reference audio of the voice to clone
    #[arg(value_name = "REFERENCE_AUDIO")]
    pub reference_audio: PathBuf,

    /// Text to speak (quote it if it contains spaces)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Language code understood by the model, e.g. "en"
    #[arg(value_name = "LANGUAGE")]
    pub language: String,

    /// Output audio file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

//! xtts-clone: Voice cloning text-to-speech CLI.
//!
//! This crate provides a command-line interface that clones a voice from a
//! reference sample and speaks text with it, using the pretrained XTTS v2
//! multilingual model through the Coqui `tts` tool.

pub mod backend;
pub mod cli;
pub mod config;
pub mod invoker;

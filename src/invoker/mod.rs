//! Synthesis invoker.
//!
//! Turns the parsed invocation into exactly one model load and one
//! synthesis call, then reports the output path.

mod synthesis;

pub use synthesis::{InvokeError, run};

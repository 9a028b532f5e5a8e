//! Synthesis invoker implementation.

use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::backend::{EngineError, EngineLoader, SynthesisRequest, XTTS_V2_MODEL};
use crate::cli::Args;

/// Errors that can occur during an invocation.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to report output path: {0}")]
    Report(#[from] io::Error),
}

/// Load the XTTS model, synthesize once, then print the output path to `out`.
///
/// Nothing is written to `out` unless synthesis succeeds.
pub fn run<L, W>(args: &Args, loader: &L, out: &mut W) -> Result<(), InvokeError>
where
    L: EngineLoader + ?Sized,
    W: Write,
{
    let engine = loader.load(XTTS_V2_MODEL)?;
    info!("Loaded {}", engine.model_name());

    let request = SynthesisRequest::new(
        args.text.clone(),
        args.reference_audio.clone(),
        args.language.clone(),
        args.output.clone(),
    );
    engine.synthesize(&request)?;

    log_duration(&args.output);

    // Raw bytes, so a non-UTF-8 path prints exactly as given.
    out.write_all(args.output.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

fn log_duration(path: &Path) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }

    if let Ok(reader) = hound::WavReader::open(path) {
        let spec = reader.spec();
        let seconds = reader.duration() as f32 / spec.sample_rate as f32;
        debug!(
            "{}: {:.2}s at {} Hz",
            path.display(),
            seconds,
            spec.sample_rate
        );
    }
}

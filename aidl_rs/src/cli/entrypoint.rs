//! Shared CLI entry point for both `aidl` and `aidl-cpp` binaries.

use std::io::Write;
use std::process::ExitCode;

use tracing::debug;

use crate::cli::{Options, Resolution, ResolverSettings, resolve, suggest_similar_flag};
use crate::logging;

/// Options controlling binary-specific behavior.
pub struct EntryOptions {
    /// Resolver knobs for this binary.
    pub settings: ResolverSettings,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was printed.
    Help,
    /// Options resolved cleanly.
    Valid,
    /// Errors were printed.
    Invalid,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Help | Outcome::Valid => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::FAILURE,
        }
    }
}

/// Run the CLI with the given options. This is the shared main() body.
pub fn run(opts: &EntryOptions) -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("[{}] {err:#}", opts.settings.program_name);
    }

    // nosemgrep: rust.lang.security.args.args
    let raw_args: Vec<String> = std::env::args().collect();

    let mut stderr = std::io::stderr().lock();
    match report(&raw_args, &opts.settings, &mut stderr) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            debug!(error = %err, "could not write to stderr");
            ExitCode::FAILURE
        }
    }
}

/// Resolves `args` and writes usage or errors to `err_out`.
pub fn report<W: Write>(
    args: &[String],
    settings: &ResolverSettings,
    err_out: &mut W,
) -> anyhow::Result<Outcome> {
    let options = match resolve(args, settings) {
        Resolution::Help { usage } => {
            write!(err_out, "{usage}")?;
            return Ok(Outcome::Help);
        }
        Resolution::Parsed(options) => options,
    };

    if options.is_valid() {
        log_resolved(&options);
        return Ok(Outcome::Valid);
    }

    for err in options.errors() {
        writeln!(err_out, "{err}")?;
        if let Some(suggestion) = err.offending_token().and_then(suggest_similar_flag) {
            writeln!(err_out, "Did you mean '{suggestion}'?")?;
        }
    }
    Ok(Outcome::Invalid)
}

fn log_resolved(options: &Options) {
    match serde_json::to_string(options) {
        Ok(json) => debug!(options = %json, "options resolved"),
        Err(err) => debug!(error = %err, "options resolved but not serializable"),
    }
}

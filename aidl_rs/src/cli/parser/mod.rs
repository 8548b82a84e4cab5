//! Option resolver: argv in, [`Resolution`] out.
//!
//! Three stages run in sequence, each stopping at its first error:
//!
//! - [`scanner`] - flag table lookup, getopt-style splitting, flag folding
//! - [`grammar`] - legacy vs modern positional conventions
//! - [`validate`] - cross-field consistency of the assembled options
//!
//! # Usage
//!
//! ```
//! use aidl_options::cli::{Resolution, ResolverSettings, resolve};
//!
//! let args: Vec<String> = ["aidl", "--lang=java", "--out=gen", "a.aidl"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! match resolve(&args, &ResolverSettings::default()) {
//!     Resolution::Help { usage } => eprint!("{usage}"),
//!     Resolution::Parsed(options) => assert!(options.is_valid()),
//! }
//! ```

mod flags;
pub mod grammar;
mod helpers;
pub mod scanner;
pub mod validate;

use tracing::debug;

use super::help::usage;
use super::options::{Options, Resolution};
use super::settings::ResolverSettings;
use crate::error::OptionsError;
use crate::types::Task;

pub use flags::FlagId;
pub use helpers::suggest_similar_flag;

/// Resolves a full argument vector (argv[0] included).
///
/// Never fails: problems are recorded on the returned [`Options`].
pub fn resolve(args: &[String], settings: &ResolverSettings) -> Resolution {
    let settings = match args.first() {
        Some(argv0) => settings.clone().with_argv0(argv0),
        None => settings.clone(),
    };
    let rest = args.get(1..).unwrap_or_default();

    let scan = scanner::scan(rest);
    if scan.help {
        return Resolution::Help {
            usage: usage(&settings),
        };
    }

    let mut options = Options::draft(&settings.program_name, settings.default_language);
    if let Err(err) = run_stages(&mut options, scan, &settings) {
        debug!(error = %err, "options rejected");
        options.fail(err);
    }
    Resolution::Parsed(Box::new(options))
}

fn run_stages(
    options: &mut Options,
    scan: scanner::Scan,
    settings: &ResolverSettings,
) -> Result<(), OptionsError> {
    // Flags before a scanning error were seen first, so their errors win.
    let summary = scanner::apply_flags(options, &scan.flags, settings)?;
    if let Some(err) = scan.error {
        return Err(err);
    }

    if options.task == Task::Unspecified {
        options.task = Task::Compile;
    }

    let grammar = grammar::select(options.task, summary.language_flag_seen);
    options.grammar = Some(grammar);

    let found = grammar::apply(grammar, options.task, options.language, &scan.positionals)?;
    options.input_files = found.input_files;
    if found.output_file.is_some() {
        options.output_file = found.output_file;
    }
    if found.output_header_dir.is_some() {
        options.output_header_dir = found.output_header_dir;
    }

    validate::validate(options, grammar)
}

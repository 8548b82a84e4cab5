//! Cross-field checks over an assembled draft.
//!
//! Checks run in a fixed order and stop at the first failure. Output-path
//! checks only apply to the modern grammar; the legacy grammar supplies its
//! outputs positionally.

use tracing::debug;

use super::helpers::has_aidl_extension;
use crate::cli::options::Options;
use crate::error::OptionsError;
use crate::types::{Grammar, Language, Task};

pub fn validate(options: &Options, grammar: Grammar) -> Result<(), OptionsError> {
    check_extensions(&options.input_files)?;
    if grammar == Grammar::Legacy {
        return Ok(());
    }
    if options.task == Task::Compile {
        check_output_dirs(options)?;
        check_single_output(options)?;
    }
    Ok(())
}

fn check_extensions(inputs: &[String]) -> Result<(), OptionsError> {
    match inputs.iter().find(|path| !has_aidl_extension(path)) {
        Some(path) => {
            debug!(%path, "input without .aidl extension");
            Err(OptionsError::WrongExtension { path: path.clone() })
        }
        None => Ok(()),
    }
}

fn check_output_dirs(options: &Options) -> Result<(), OptionsError> {
    if options.output_dir.is_none() {
        return Err(OptionsError::MissingOutputDir);
    }
    match options.language {
        Language::Cpp if options.output_header_dir.is_none() => Err(OptionsError::MissingHeaderDir),
        Language::Java if options.output_header_dir.is_some() => Err(OptionsError::HeaderDirForJava),
        _ => Ok(()),
    }
}

/// One output file or one dependency file cannot serve several inputs.
fn check_single_output(options: &Options) -> Result<(), OptionsError> {
    if options.input_files.len() <= 1 {
        return Ok(());
    }
    if let Some(output) = &options.output_file {
        return Err(OptionsError::SingleOutputForMultipleInputs {
            output: output.clone(),
        });
    }
    if options.dependency_file.is_some() {
        return Err(OptionsError::DepFileForMultipleInputs);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

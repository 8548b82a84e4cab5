//! Positional grammars.
//!
//! Two conventions share one argument stream:
//!
//! ```text
//! legacy  (no --lang, compile)   java: INPUT [OUTPUT]
//!                                cpp:  INPUT HEADER_DIR OUTPUT
//! modern  (everything else)      compile:            INPUT...
//!                                preprocess/dumpapi: OUTPUT INPUT...
//! ```
//!
//! The choice is made once by [`select`]; each grammar is a pure function
//! from positionals to [`Positionals`].

use tracing::debug;

use super::helpers::java_output_for;
use crate::error::OptionsError;
use crate::types::{Grammar, Language, Task};

/// What a grammar extracted from the positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positionals {
    pub input_files: Vec<String>,
    pub output_file: Option<String>,
    pub output_header_dir: Option<String>,
}

/// Legacy applies only to a compile that was not requested through `--lang`.
pub fn select(task: Task, language_flag_seen: bool) -> Grammar {
    if !language_flag_seen && task == Task::Compile {
        Grammar::Legacy
    } else {
        Grammar::Modern
    }
}

pub fn legacy(language: Language, positionals: &[String]) -> Result<Positionals, OptionsError> {
    let (input, rest) = positionals
        .split_first()
        .ok_or(OptionsError::NoInputFile)?;

    let mut out = Positionals {
        input_files: vec![input.clone()],
        ..Positionals::default()
    };

    let rest = match language {
        Language::Java => match rest.split_first() {
            Some((output, rest)) => {
                out.output_file = Some(output.clone());
                rest
            }
            None => {
                out.output_file = Some(java_output_for(input));
                rest
            }
        },
        Language::Cpp => match rest {
            [header_dir, output, rest @ ..] => {
                out.output_header_dir = Some(header_dir.clone());
                out.output_file = Some(output.clone());
                rest
            }
            _ => return Err(OptionsError::NoHeaderDirOrOutput),
        },
    };

    if !rest.is_empty() {
        return Err(OptionsError::TooManyArguments {
            surplus: rest.to_vec(),
        });
    }
    Ok(out)
}

pub fn modern(task: Task, positionals: &[String]) -> Result<Positionals, OptionsError> {
    match task {
        Task::Compile | Task::Unspecified => {
            if positionals.is_empty() {
                return Err(OptionsError::NoInputFile);
            }
            Ok(Positionals {
                input_files: positionals.to_vec(),
                ..Positionals::default()
            })
        }
        Task::Preprocess | Task::DumpApi => match positionals {
            [output, inputs @ ..] if !inputs.is_empty() => Ok(Positionals {
                input_files: inputs.to_vec(),
                output_file: Some(output.clone()),
                output_header_dir: None,
            }),
            _ => Err(OptionsError::InsufficientArguments {
                got: positionals.len(),
            }),
        },
    }
}

/// Runs the grammar picked by [`select`].
pub fn apply(
    grammar: Grammar,
    task: Task,
    language: Language,
    positionals: &[String],
) -> Result<Positionals, OptionsError> {
    debug!(?grammar, %task, %language, count = positionals.len(), "applying positional grammar");
    match grammar {
        Grammar::Legacy => legacy(language, positionals),
        Grammar::Modern => modern(task, positionals),
    }
}

// ============================================================================
// Tests
// ============================================================================

//! The resolved configuration handed to the code generator.

use serde::Serialize;

use crate::error::OptionsError;
use crate::types::{Grammar, Language, Task};

/// Outcome of resolving a command line.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// `--help` was given; nothing else was validated.
    Help { usage: String },
    /// Flags and positionals were resolved. Check [`Options::is_valid`].
    Parsed(Box<Options>),
}

impl Resolution {
    /// Returns the options, or `None` when help was requested.
    pub fn into_options(self) -> Option<Options> {
        match self {
            Resolution::Parsed(options) => Some(*options),
            Resolution::Help { .. } => None,
        }
    }

    pub fn is_help(&self) -> bool {
        matches!(self, Resolution::Help { .. })
    }
}

/// Options for one generator invocation.
///
/// Either valid (no errors) and safe to hand to code generation, or
/// invalid; an invalid value must not be used beyond reporting its errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Options {
    pub(crate) program_name: String,
    pub(crate) task: Task,
    pub(crate) language: Language,
    pub(crate) grammar: Option<Grammar>,
    pub(crate) import_paths: Vec<String>,
    pub(crate) preprocessed_files: Vec<String>,
    pub(crate) dependency_file: Option<String>,
    pub(crate) output_dir: Option<String>,
    pub(crate) output_header_dir: Option<String>,
    pub(crate) output_file: Option<String>,
    pub(crate) auto_dep_file: bool,
    pub(crate) fail_on_parcelable: bool,
    pub(crate) dependency_file_ninja: bool,
    pub(crate) gen_traces: bool,
    pub(crate) gen_transaction_names: bool,
    pub(crate) input_files: Vec<String>,
    #[serde(serialize_with = "serialize_errors")]
    pub(crate) errors: Vec<OptionsError>,
}

fn serialize_errors<S>(errors: &[OptionsError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

impl Options {
    pub(crate) fn draft(program_name: &str, language: Language) -> Self {
        Self {
            program_name: program_name.to_string(),
            task: Task::Unspecified,
            language,
            grammar: None,
            import_paths: Vec::new(),
            preprocessed_files: Vec::new(),
            dependency_file: None,
            output_dir: None,
            output_header_dir: None,
            output_file: None,
            auto_dep_file: false,
            fail_on_parcelable: false,
            dependency_file_ninja: false,
            gen_traces: false,
            gen_transaction_names: false,
            input_files: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn fail(&mut self, err: OptionsError) {
        self.errors.push(err);
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn task(&self) -> Task {
        self.task
    }

    pub fn target_language(&self) -> Language {
        self.language
    }

    /// Positional grammar that was applied; `None` if scanning failed first.
    pub fn grammar(&self) -> Option<Grammar> {
        self.grammar
    }

    /// Import search paths, in command-line order. Duplicates are kept.
    pub fn import_paths(&self) -> &[String] {
        &self.import_paths
    }

    pub fn preprocessed_files(&self) -> &[String] {
        &self.preprocessed_files
    }

    pub fn dependency_file(&self) -> Option<&str> {
        self.dependency_file.as_deref()
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output_dir.as_deref()
    }

    pub fn output_header_dir(&self) -> Option<&str> {
        self.output_header_dir.as_deref()
    }

    pub fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref()
    }

    pub fn auto_dep_file(&self) -> bool {
        self.auto_dep_file
    }

    pub fn fail_on_parcelable(&self) -> bool {
        self.fail_on_parcelable
    }

    pub fn dependency_file_ninja(&self) -> bool {
        self.dependency_file_ninja
    }

    pub fn gen_traces(&self) -> bool {
        self.gen_traces
    }

    pub fn gen_transaction_names(&self) -> bool {
        self.gen_transaction_names
    }

    pub fn input_files(&self) -> &[String] {
        &self.input_files
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[OptionsError] {
        &self.errors
    }

    /// All error messages, one per line, in the order they were recorded.
    pub fn error_message(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

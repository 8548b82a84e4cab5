//! Error taxonomy for option resolution.
//!
//! Every variant renders to the exact line printed to the user, so the
//! rendered text is part of the command-line contract.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    // --- flag scanning ---
    #[error("Invalid argument: '{token}'")]
    InvalidArgument { token: String },

    #[error("Unsupported language: '{value}'")]
    UnsupportedLanguage { value: String },

    #[error("{program} does not support --lang.")]
    LanguageSelectionForbidden { program: String },

    #[error("Conflicting tasks: '{flag}' cannot be used with '{earlier}'.")]
    ConflictingTask { flag: String, earlier: String },

    // --- positional grammars ---
    #[error("No input file.")]
    NoInputFile,

    #[error("No HEADER_DIR or OUTPUT.")]
    NoHeaderDirOrOutput,

    #[error("Too many arguments: {}", .surplus.join(" "))]
    TooManyArguments { surplus: Vec<String> },

    #[error("Insufficient arguments. At least 2 required, but got {got}.")]
    InsufficientArguments { got: usize },

    // --- cross-field validation ---
    #[error("Expected .aidl file for input but got '{path}'")]
    WrongExtension { path: String },

    #[error("Output directory is not set. Set with --out.")]
    MissingOutputDir,

    #[error("Header output directory is not set. Set with --header_out.")]
    MissingHeaderDir,

    #[error("Header output directory is set, which does not make sense for Java.")]
    HeaderDirForJava,

    #[error(
        "Multiple AIDL files can't be compiled to a single output file '{output}'. \
         Use --out=DIR instead for output files."
    )]
    SingleOutputForMultipleInputs { output: String },

    #[error(
        "-d or --dep doesn't work when compiling multiple AIDL files. \
         Use '-a' to generate dependency file next to the output file \
         with the name based on the input file."
    )]
    DepFileForMultipleInputs,
}

impl OptionsError {
    /// The command-line token that caused a scanner failure, if any.
    pub fn offending_token(&self) -> Option<&str> {
        match self {
            OptionsError::InvalidArgument { token } => Some(token),
            _ => None,
        }
    }
}

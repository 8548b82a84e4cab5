//! Resolver settings supplied by the entry point rather than the command line.

use std::path::Path;

use crate::types::Language;

/// Per-binary knobs for option resolution.
///
/// `allow_language_selection` is a capability: the compatibility binary
/// turns it off so that any `--lang` is rejected, whatever the default
/// language happens to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Name used in messages; the base name of argv[0] when resolved from argv.
    pub program_name: String,
    /// Language assumed when no `--lang` is given.
    pub default_language: Language,
    /// Whether `--lang` is accepted at all.
    pub allow_language_selection: bool,
}

impl ResolverSettings {
    /// Settings for the full `aidl` entry point.
    pub fn full(default_language: Language) -> Self {
        Self {
            program_name: "aidl".to_string(),
            default_language,
            allow_language_selection: true,
        }
    }

    /// Settings for the C++-only compatibility entry point.
    pub fn compat_cpp() -> Self {
        Self {
            program_name: "aidl-cpp".to_string(),
            default_language: Language::Cpp,
            allow_language_selection: false,
        }
    }

    /// Replaces the program name with the base name of `argv0`.
    ///
    /// An empty argv[0] keeps the configured name.
    pub fn with_argv0(mut self, argv0: &str) -> Self {
        let base = Path::new(argv0)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty());
        if let Some(base) = base {
            self.program_name = base.to_string();
        }
        self
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::full(Language::Java)
    }
}

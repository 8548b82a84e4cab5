use std::fmt;

use serde::Serialize;

/// Suffix every input file must carry.
pub const AIDL_EXTENSION: &str = ".aidl";
/// Suffix of the Java source derived from a legacy-form input.
pub const JAVA_EXTENSION: &str = ".java";

/// The high-level operation requested on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    #[default]
    Unspecified,
    Compile,
    Preprocess,
    DumpApi,
}

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Task::Unspecified => "unspecified",
            Task::Compile => "compile",
            Task::Preprocess => "preprocess",
            Task::DumpApi => "dumpapi",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target language of the generated sources.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Java,
    Cpp,
}

impl Language {
    /// Parses a `--lang` value. Values are matched exactly, after trimming.
    pub fn from_flag_value(raw: &str) -> Option<Self> {
        match raw {
            "java" => Some(Language::Java),
            "cpp" => Some(Language::Cpp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which positional-argument convention was applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grammar {
    /// `INPUT [OUTPUT]` for Java, `INPUT HEADER_DIR OUTPUT` for C++.
    Legacy,
    /// `INPUT...` for compile, `OUTPUT INPUT...` for preprocess/dumpapi.
    Modern,
}

//! # aidl-options
//!
//! Option resolution for the AIDL code generator. Turns raw process
//! arguments into a validated [`Options`](cli::Options) value before any
//! file is read or any code is generated.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use aidl_options::cli::{ResolverSettings, resolve};
//! use aidl_options::types::{Language, Task};
//!
//! let args: Vec<String> = ["aidl", "--dumpapi", "sig.txt", "a.aidl"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let options = resolve(&args, &ResolverSettings::full(Language::Java))
//!     .into_options()
//!     .expect("not a --help invocation");
//! assert!(options.is_valid());
//! assert_eq!(options.task(), Task::DumpApi);
//! assert_eq!(options.output_file(), Some("sig.txt"));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! aidl --lang=cpp -o gen -h include IFoo.aidl IBar.aidl
//! aidl --preprocess framework.aidl IFoo.aidl
//! aidl IFoo.aidl                      # legacy form, writes IFoo.java
//! aidl-cpp IFoo.aidl include IFoo.cpp # legacy C++ form
//! ```

/// Command-line resolution: scanner, positional grammars, validation.
pub mod cli;

/// Error taxonomy; each variant renders to the user-facing message.
pub mod error;

/// Logging setup for the binaries.
pub mod logging;

/// Task, language and grammar enums.
pub mod types;

pub use cli::{Options, Resolution, ResolverSettings, resolve};
pub use error::OptionsError;
pub use types::{Grammar, Language, Task};

//! Command-line surface of the generator.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      argv + ResolverSettings                  │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  scanner   flags ──► draft Options, positionals, --help       │
//! │     │                                                         │
//! │     ▼                                                         │
//! │  grammar   legacy (no --lang, compile) | modern               │
//! │     │                                                         │
//! │     ▼                                                         │
//! │  validate  extensions, output dirs, single-output conflicts   │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//!              Resolution::Help | Resolution::Parsed(Options)
//! ```
//!
//! # Module Structure
//!
//! - [`parser`] - the three resolution stages and [`resolve`]
//! - [`options`] - resolved [`Options`] and [`Resolution`]
//! - [`settings`] - per-binary [`ResolverSettings`]
//! - [`help`] - usage text
//! - [`entrypoint`] - shared `main()` body for both binaries

pub mod entrypoint;
pub mod help;
mod help_texts;
pub mod options;
pub mod parser;
pub mod settings;

pub use options::{Options, Resolution};
pub use parser::{resolve, suggest_similar_flag};
pub use settings::ResolverSettings;

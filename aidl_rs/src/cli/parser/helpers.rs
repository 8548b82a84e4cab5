//! Helper functions shared by the parser stages.
//!
//! - Flag value normalisation
//! - Default output naming for the legacy Java form
//! - Flag suggestion via Levenshtein distance

use strsim::levenshtein;

use super::flags::long_names;
use crate::types::{AIDL_EXTENSION, JAVA_EXTENSION};

/// Flag values are stored without surrounding whitespace.
pub(super) fn trim_value(raw: &str) -> String {
    raw.trim().to_string()
}

/// Empty values mean "not given".
pub(super) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// `foo/IBar.aidl` -> `foo/IBar.java`.
///
/// An input without the `.aidl` suffix gets `.java` appended; the extension
/// check reports such inputs anyway.
pub(super) fn java_output_for(input: &str) -> String {
    match input.strip_suffix(AIDL_EXTENSION) {
        Some(stem) => format!("{stem}{JAVA_EXTENSION}"),
        None => format!("{input}{JAVA_EXTENSION}"),
    }
}

pub(super) fn has_aidl_extension(path: &str) -> bool {
    path.ends_with(AIDL_EXTENSION)
}

/// Suggest a long flag for a mistyped `--token`.
/// Returns Some(suggestion) if a close match is found (distance <= 2).
pub fn suggest_similar_flag(token: &str) -> Option<String> {
    let name = token.strip_prefix("--")?;
    let name = name.split_once('=').map_or(name, |(name, _)| name);
    if name.is_empty() {
        return None;
    }

    let mut best_match: Option<(&str, usize)> = None;
    for candidate in long_names() {
        let distance = levenshtein(name, candidate);
        if distance > 2 {
            continue;
        }
        match best_match {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best_match = Some((candidate, distance)),
        }
    }

    best_match.map(|(candidate, _)| format!("--{candidate}"))
}

// ============================================================================
// Tests
// ============================================================================

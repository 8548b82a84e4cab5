//! Flag scanning: splits the argument vector into recognised flags and
//! positionals, then folds the flags into a draft [`Options`].
//!
//! Scanning follows `getopt_long` conventions (permuted positionals, `--`
//! terminator, clustered short flags, unique long prefixes) but keeps no
//! cursor between calls.

use tracing::{debug, trace};

use super::flags::{FlagId, FlagSpec, LongMatch, lookup_long, lookup_short};
use super::helpers::{non_empty, trim_value};
use crate::cli::options::Options;
use crate::cli::settings::ResolverSettings;
use crate::error::OptionsError;
use crate::types::{Language, Task};

/// One recognised flag, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFlag {
    pub id: FlagId,
    /// Trimmed value for value-taking flags.
    pub value: Option<String>,
    /// Canonical spelling, used in messages.
    pub spelling: String,
}

/// Raw split of the command line.
#[derive(Debug, Default)]
pub struct Scan {
    pub flags: Vec<ParsedFlag>,
    pub positionals: Vec<String>,
    pub help: bool,
    /// First malformed or unknown flag. No flag after it is applied; later
    /// tokens are only checked for `--help`.
    pub error: Option<OptionsError>,
}

fn invalid(token: &str) -> OptionsError {
    OptionsError::InvalidArgument {
        token: token.to_string(),
    }
}

fn parsed(spec: &FlagSpec, value: Option<&str>) -> ParsedFlag {
    ParsedFlag {
        id: spec.id,
        value: value.map(trim_value),
        spelling: spec.display(),
    }
}

/// Splits `args` (argv without the program name) into flags and positionals.
///
/// Stops at the first bad token; `--help` anywhere in flag position still
/// wins over that error.
pub fn scan(args: &[String]) -> Scan {
    let mut out = Scan::default();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        i += 1;

        if arg == "--" {
            out.positionals.extend(args[i..].iter().cloned());
            break;
        }

        let step = if let Some(body) = arg.strip_prefix("--") {
            scan_long(arg, body, args, &mut i)
        } else if arg.len() > 1 && arg.starts_with('-') {
            scan_short_cluster(arg, args, &mut i)
        } else {
            out.positionals.push(arg.clone());
            continue;
        };

        match step {
            Ok(flags) => {
                for flag in flags {
                    if flag.id == FlagId::Help {
                        debug!("help requested, skipping resolution");
                        out.help = true;
                        return out;
                    }
                    trace!(flag = %flag.spelling, value = ?flag.value, "scanned flag");
                    out.flags.push(flag);
                }
            }
            Err(err) => {
                debug!(token = %arg, "flag scanning stopped");
                out.help = help_after_error(args, i);
                out.error = Some(err);
                return out;
            }
        }
    }

    out
}

fn scan_long(
    arg: &str,
    body: &str,
    args: &[String],
    i: &mut usize,
) -> Result<Vec<ParsedFlag>, OptionsError> {
    let (name, inline) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let spec = match lookup_long(name) {
        LongMatch::Found(spec) => spec,
        LongMatch::Ambiguous(names) => {
            debug!(token = %arg, candidates = ?names, "ambiguous long flag");
            return Err(invalid(arg));
        }
        LongMatch::Unknown => return Err(invalid(arg)),
    };

    match (spec.takes_value, inline) {
        (true, Some(value)) => Ok(vec![parsed(spec, Some(value))]),
        (true, None) => {
            let value = args.get(*i).ok_or_else(|| invalid(arg))?;
            *i += 1;
            Ok(vec![parsed(spec, Some(value))])
        }
        (false, Some(_)) => Err(invalid(arg)),
        (false, None) => Ok(vec![parsed(spec, None)]),
    }
}

fn scan_short_cluster(
    arg: &str,
    args: &[String],
    i: &mut usize,
) -> Result<Vec<ParsedFlag>, OptionsError> {
    let mut flags = Vec::new();
    let cluster = &arg[1..];

    for (offset, c) in cluster.char_indices() {
        let spec = lookup_short(c).ok_or_else(|| invalid(arg))?;
        if !spec.takes_value {
            flags.push(parsed(spec, None));
            continue;
        }

        // A value-taking flag swallows the rest of the cluster, or the next token.
        let rest = &cluster[offset + c.len_utf8()..];
        if !rest.is_empty() {
            flags.push(parsed(spec, Some(rest)));
        } else {
            let value = args.get(*i).ok_or_else(|| invalid(arg))?;
            *i += 1;
            flags.push(parsed(spec, Some(value)));
        }
        return Ok(flags);
    }

    Ok(flags)
}

/// Keeps reading from `i` with the normal flag rules, only to find `--help`.
///
/// Bad tokens are skipped, values are still consumed by their flags, and
/// `--` ends the search.
fn help_after_error(args: &[String], mut i: usize) -> bool {
    while i < args.len() {
        let arg = &args[i];
        i += 1;

        if arg == "--" {
            return false;
        }
        let step = if let Some(body) = arg.strip_prefix("--") {
            scan_long(arg, body, args, &mut i)
        } else if arg.len() > 1 && arg.starts_with('-') {
            scan_short_cluster(arg, args, &mut i)
        } else {
            continue;
        };
        if step.is_ok_and(|flags| flags.iter().any(|flag| flag.id == FlagId::Help)) {
            return true;
        }
    }
    false
}

/// What the scanner learned beyond the draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSummary {
    /// An explicit `--lang` was accepted.
    pub language_flag_seen: bool,
}

/// Folds `flags` into `draft` in order. Single-valued flags are last-wins,
/// list-valued flags append.
///
/// Stops at the first flag that cannot be applied.
pub fn apply_flags(
    draft: &mut Options,
    flags: &[ParsedFlag],
    settings: &ResolverSettings,
) -> Result<FlagSummary, OptionsError> {
    let mut summary = FlagSummary {
        language_flag_seen: false,
    };
    let mut task_flag: Option<&str> = None;

    for flag in flags {
        let value = flag.value.clone().unwrap_or_default();
        match flag.id {
            FlagId::Lang => {
                if !settings.allow_language_selection {
                    return Err(OptionsError::LanguageSelectionForbidden {
                        program: settings.program_name.clone(),
                    });
                }
                let language = Language::from_flag_value(&value)
                    .ok_or(OptionsError::UnsupportedLanguage { value })?;
                request_task(draft, Task::Compile, flag, &mut task_flag)?;
                draft.language = language;
                summary.language_flag_seen = true;
            }
            FlagId::Preprocess => request_task(draft, Task::Preprocess, flag, &mut task_flag)?,
            FlagId::DumpApi => request_task(draft, Task::DumpApi, flag, &mut task_flag)?,
            FlagId::Include => draft.import_paths.push(value),
            FlagId::Preprocessed => draft.preprocessed_files.push(value),
            // An empty path leaves the setting unset.
            FlagId::Dep => draft.dependency_file = non_empty(value),
            FlagId::Out => draft.output_dir = non_empty(value),
            FlagId::HeaderOut => draft.output_header_dir = non_empty(value),
            FlagId::AutoDep => draft.auto_dep_file = true,
            FlagId::FailOnParcelable => draft.fail_on_parcelable = true,
            FlagId::Ninja => draft.dependency_file_ninja = true,
            FlagId::Trace => draft.gen_traces = true,
            FlagId::TransactionNames => draft.gen_transaction_names = true,
            // Handled during scanning; never reaches here.
            FlagId::Help => {}
        }
    }

    Ok(summary)
}

/// Unspecified moves to a task once; asking again for the same task is fine,
/// asking for a different one is an error.
fn request_task<'a>(
    draft: &mut Options,
    task: Task,
    flag: &'a ParsedFlag,
    task_flag: &mut Option<&'a str>,
) -> Result<(), OptionsError> {
    match draft.task {
        Task::Unspecified => {
            debug!(%task, flag = %flag.spelling, "task selected");
            draft.task = task;
            *task_flag = Some(&flag.spelling);
            Ok(())
        }
        current if current == task => Ok(()),
        _ => Err(OptionsError::ConflictingTask {
            flag: flag.spelling.clone(),
            earlier: task_flag.unwrap_or_default().to_string(),
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn ids(out: &Scan) -> Vec<FlagId> {
        out.flags.iter().map(|flag| flag.id).collect()
    }

    #[test]
    fn test_positionals_are_permuted_out() {
        let out = scan(&args(&["a.aidl", "-I", "inc", "b.aidl", "--trace"]));
        assert_eq!(out.positionals, vec!["a.aidl", "b.aidl"]);
        assert_eq!(ids(&out), vec![FlagId::Include, FlagId::Trace]);
        assert!(out.error.is_none());
    }

    #[test]
    fn test_long_value_forms() {
        let out = scan(&args(&["--out=gen", "--include", " inc ", "--dep= d.d"]));
        let values: Vec<_> = out.flags.iter().map(|f| f.value.clone()).collect();
        assert_eq!(
            values,
            vec![Some("gen".into()), Some("inc".into()), Some("d.d".into())]
        );
    }

    #[test]
    fn test_short_cluster_and_attached_value() {
        let out = scan(&args(&["-abt", "-Iinc", "-ogen"]));
        assert_eq!(
            ids(&out),
            vec![
                FlagId::AutoDep,
                FlagId::FailOnParcelable,
                FlagId::Trace,
                FlagId::Include,
                FlagId::Out
            ]
        );
        assert_eq!(out.flags[3].value.as_deref(), Some("inc"));
        assert_eq!(out.flags[4].value.as_deref(), Some("gen"));
    }

    #[test]
    fn test_cluster_value_flag_takes_rest() {
        let out = scan(&args(&["-aIinc/dir"]));
        assert_eq!(ids(&out), vec![FlagId::AutoDep, FlagId::Include]);
        assert_eq!(out.flags[1].value.as_deref(), Some("inc/dir"));
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let out = scan(&args(&["--", "--trace", "-a"]));
        assert!(out.flags.is_empty());
        assert_eq!(out.positionals, vec!["--trace", "-a"]);
    }

    #[test]
    fn test_lone_dash_is_positional() {
        let out = scan(&args(&["-"]));
        assert_eq!(out.positionals, vec!["-"]);
    }

    #[test]
    fn test_unknown_flag_stops_scanning() {
        let out = scan(&args(&["-a", "--bogus", "-t", "x.aidl"]));
        assert_eq!(ids(&out), vec![FlagId::AutoDep]);
        assert!(out.positionals.is_empty());
        assert_eq!(
            out.error,
            Some(OptionsError::InvalidArgument {
                token: "--bogus".into()
            })
        );
    }

    #[test]
    fn test_missing_value_is_invalid_position() {
        let out = scan(&args(&["a.aidl", "-o"]));
        assert_eq!(
            out.error,
            Some(OptionsError::InvalidArgument { token: "-o".into() })
        );
    }

    #[test]
    fn test_boolean_long_flag_rejects_value() {
        let out = scan(&args(&["--ninja=yes"]));
        assert!(matches!(out.error, Some(OptionsError::InvalidArgument { .. })));
    }

    #[test]
    fn test_ambiguous_prefix_is_invalid() {
        let out = scan(&args(&["--pre", "x.aidl"]));
        assert_eq!(
            out.error,
            Some(OptionsError::InvalidArgument {
                token: "--pre".into()
            })
        );
    }

    #[test]
    fn test_help_returns_immediately() {
        let out = scan(&args(&["-a", "--help", "--bogus"]));
        assert!(out.help);
        assert!(out.error.is_none());
    }

    #[test]
    fn test_help_wins_over_earlier_error() {
        let out = scan(&args(&["--bogus", "x", "--help"]));
        assert!(out.help);

        let out = scan(&args(&["--bogus", "--", "--help"]));
        assert!(!out.help);
    }

    #[test]
    fn test_help_after_error_follows_flag_rules() {
        let out = scan(&args(&["--bogus", "--help=x"]));
        assert!(!out.help);

        let out = scan(&args(&["--bogus", "-I", "--help"]));
        assert!(!out.help);

        let out = scan(&args(&["--bogus", "--help=x", "-I", "inc", "--he"]));
        assert!(out.help);
    }

    #[test]
    fn test_help_with_value_is_invalid() {
        let out = scan(&args(&["--help=x"]));
        assert!(!out.help);
        assert_eq!(
            out.error,
            Some(OptionsError::InvalidArgument {
                token: "--help=x".into()
            })
        );
    }

    #[test]
    fn test_help_consumed_as_value_is_not_help() {
        let out = scan(&args(&["-I", "--help"]));
        assert!(!out.help);
        assert_eq!(out.flags[0].value.as_deref(), Some("--help"));
    }

    fn apply(raw: &[&str], settings: &ResolverSettings) -> (Options, Result<FlagSummary, OptionsError>) {
        let out = scan(&args(raw));
        let mut draft = Options::draft(&settings.program_name, settings.default_language);
        let result = apply_flags(&mut draft, &out.flags, settings);
        (draft, result)
    }

    #[test]
    fn test_apply_accumulates_and_overrides() {
        let (draft, result) = apply(
            &["-I", "a", "--include=b", "-I", "a", "-p", "x", "-p", "y", "-o", "one", "-o", "two"],
            &ResolverSettings::default(),
        );
        assert!(result.is_ok());
        assert_eq!(draft.import_paths, vec!["a", "b", "a"]);
        assert_eq!(draft.preprocessed_files, vec!["x", "y"]);
        assert_eq!(draft.output_dir.as_deref(), Some("two"));
    }

    #[test]
    fn test_apply_empty_path_clears_setting() {
        let (draft, result) = apply(
            &["-o", "gen", "--out= ", "--header_out=", "-d", "  "],
            &ResolverSettings::default(),
        );
        assert!(result.is_ok());
        assert_eq!(draft.output_dir, None);
        assert_eq!(draft.output_header_dir, None);
        assert_eq!(draft.dependency_file, None);
    }

    #[test]
    fn test_apply_booleans() {
        let (draft, _) = apply(
            &["-a", "-b", "--ninja", "-t", "--transaction_names"],
            &ResolverSettings::default(),
        );
        assert!(draft.auto_dep_file);
        assert!(draft.fail_on_parcelable);
        assert!(draft.dependency_file_ninja);
        assert!(draft.gen_traces);
        assert!(draft.gen_transaction_names);
    }

    #[test]
    fn test_apply_lang_selects_compile() {
        let (draft, result) = apply(&["--lang=cpp"], &ResolverSettings::default());
        assert_eq!(
            result,
            Ok(FlagSummary {
                language_flag_seen: true
            })
        );
        assert_eq!(draft.task, Task::Compile);
        assert_eq!(draft.language, Language::Cpp);
    }

    #[test]
    fn test_apply_trims_lang_value() {
        let (draft, result) = apply(&["--lang", " java "], &ResolverSettings::full(Language::Cpp));
        assert!(result.is_ok());
        assert_eq!(draft.language, Language::Java);
    }

    #[test]
    fn test_apply_unsupported_language() {
        let (_, result) = apply(&["--lang=ruby"], &ResolverSettings::default());
        assert_eq!(
            result,
            Err(OptionsError::UnsupportedLanguage {
                value: "ruby".into()
            })
        );
    }

    #[test]
    fn test_apply_lang_forbidden_in_compat_mode() {
        let (_, result) = apply(&["--lang=cpp"], &ResolverSettings::compat_cpp());
        assert_eq!(
            result,
            Err(OptionsError::LanguageSelectionForbidden {
                program: "aidl-cpp".into()
            })
        );
    }

    #[test]
    fn test_apply_repeated_task_is_tolerated() {
        let (draft, result) = apply(&["--dumpapi", "--dumpapi"], &ResolverSettings::default());
        assert!(result.is_ok());
        assert_eq!(draft.task, Task::DumpApi);
    }

    #[test]
    fn test_apply_conflicting_task() {
        let (draft, result) = apply(&["--preprocess", "--lang=java"], &ResolverSettings::default());
        assert_eq!(
            result,
            Err(OptionsError::ConflictingTask {
                flag: "--lang".into(),
                earlier: "--preprocess".into()
            })
        );
        assert_eq!(draft.task, Task::Preprocess);
    }
}

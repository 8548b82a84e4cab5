//! Table of recognised flags.
//!
//! Short and long spellings map onto one canonical [`FlagId`]; the scanner
//! never matches on raw strings outside this table.

/// Canonical identity of a recognised flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FlagId {
    Lang,
    Preprocess,
    DumpApi,
    Include,
    Preprocessed,
    Dep,
    Out,
    HeaderOut,
    AutoDep,
    FailOnParcelable,
    Ninja,
    Trace,
    TransactionNames,
    Help,
}

#[derive(Debug)]
pub struct FlagSpec {
    pub id: FlagId,
    pub short: Option<char>,
    pub long: Option<&'static str>,
    pub takes_value: bool,
}

impl FlagSpec {
    /// Preferred spelling for messages: the long form when there is one.
    pub fn display(&self) -> String {
        match (self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }
}

const fn flag(
    id: FlagId,
    short: Option<char>,
    long: Option<&'static str>,
    takes_value: bool,
) -> FlagSpec {
    FlagSpec {
        id,
        short,
        long,
        takes_value,
    }
}

pub(crate) const FLAGS: &[FlagSpec] = &[
    flag(FlagId::Lang, None, Some("lang"), true),
    flag(FlagId::Preprocess, None, Some("preprocess"), false),
    flag(FlagId::DumpApi, None, Some("dumpapi"), false),
    flag(FlagId::Include, Some('I'), Some("include"), true),
    flag(FlagId::Preprocessed, Some('p'), Some("preprocessed"), true),
    flag(FlagId::Dep, Some('d'), Some("dep"), true),
    flag(FlagId::Out, Some('o'), Some("out"), true),
    flag(FlagId::HeaderOut, Some('h'), Some("header_out"), true),
    flag(FlagId::AutoDep, Some('a'), None, false),
    flag(FlagId::FailOnParcelable, Some('b'), None, false),
    flag(FlagId::Ninja, None, Some("ninja"), false),
    flag(FlagId::Trace, Some('t'), Some("trace"), false),
    flag(FlagId::TransactionNames, None, Some("transaction_names"), false),
    flag(FlagId::Help, None, Some("help"), false),
];

pub(crate) fn lookup_short(c: char) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.short == Some(c))
}

/// Result of matching a long flag name.
#[derive(Debug)]
pub(crate) enum LongMatch {
    Found(&'static FlagSpec),
    Ambiguous(Vec<&'static str>),
    Unknown,
}

/// Matches `name` exactly, or as an unambiguous prefix of one long flag.
pub(crate) fn lookup_long(name: &str) -> LongMatch {
    if name.is_empty() {
        return LongMatch::Unknown;
    }
    if let Some(spec) = FLAGS.iter().find(|spec| spec.long == Some(name)) {
        return LongMatch::Found(spec);
    }
    let candidates: Vec<&'static FlagSpec> = FLAGS
        .iter()
        .filter(|spec| spec.long.is_some_and(|long| long.starts_with(name)))
        .collect();
    match candidates.as_slice() {
        [] => LongMatch::Unknown,
        [only] => LongMatch::Found(*only),
        many => LongMatch::Ambiguous(many.iter().filter_map(|spec| spec.long).collect()),
    }
}

/// All long names, for suggestions.
pub(crate) fn long_names() -> impl Iterator<Item = &'static str> {
    FLAGS.iter().filter_map(|spec| spec.long)
}

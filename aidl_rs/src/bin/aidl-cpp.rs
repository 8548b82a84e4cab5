//! C++-only compatibility binary. Kept for build rules that predate `--lang`;
//! it accepts only the legacy C++ form and the flag-based forms without
//! `--lang`.

use std::process::ExitCode;

use aidl_options::ResolverSettings;
use aidl_options::cli::entrypoint::{EntryOptions, run};

fn main() -> ExitCode {
    run(&EntryOptions {
        settings: ResolverSettings::compat_cpp(),
    })
}

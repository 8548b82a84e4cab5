use std::process::ExitCode;

use aidl_options::cli::entrypoint::{EntryOptions, run};
use aidl_options::{Language, ResolverSettings};

fn main() -> ExitCode {
    run(&EntryOptions {
        settings: ResolverSettings::full(Language::Java),
    })
}

//! End-to-End CLI tests for the `aidl` and `aidl-cpp` binaries.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn aidl() -> Command {
    let mut cmd = cargo_bin_cmd!("aidl");
    cmd.env_remove("AIDL_LOG").env_remove("RUST_LOG");
    cmd
}

fn aidl_cpp() -> Command {
    let mut cmd = cargo_bin_cmd!("aidl-cpp");
    cmd.env_remove("AIDL_LOG").env_remove("RUST_LOG");
    cmd
}

// ============================================
// Help
// ============================================

mod help {
    use super::*;

    #[test]
    fn shows_help_on_stderr() {
        aidl()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("--lang={java|cpp}"))
            .stderr(predicate::str::contains("INPUT [OUTPUT]"));
    }

    #[test]
    fn help_wins_over_bad_arguments() {
        aidl()
            .args(["--lang=ruby", "nope.txt", "--help"])
            .assert()
            .success()
            .stderr(predicate::str::contains("usage:"))
            .stderr(predicate::str::contains("Unsupported language").not());
    }

    #[test]
    fn cpp_binary_shows_cpp_legacy_form() {
        aidl_cpp()
            .arg("--help")
            .assert()
            .success()
            .stderr(predicate::str::contains("INPUT HEADER_DIR OUTPUT"));
    }
}

// ============================================
// Valid invocations
// ============================================

mod valid {
    use super::*;

    #[test]
    fn modern_java_compile() {
        aidl()
            .args(["--lang=java", "--out=gen", "a.aidl", "b.aidl"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn legacy_java_compile() {
        aidl().arg("IFoo.aidl").assert().success();
    }

    #[test]
    fn dumpapi() {
        aidl()
            .args(["--dumpapi", "sig.txt", "a.aidl"])
            .assert()
            .success();
    }

    #[test]
    fn legacy_cpp_compile() {
        aidl_cpp()
            .args(["-I", "src", "IFoo.aidl", "include", "IFoo.cpp"])
            .assert()
            .success();
    }

    #[test]
    fn debug_log_dumps_resolved_options() {
        aidl()
            .env("AIDL_LOG", "debug")
            .args(["--lang=java", "-o", "gen", "a.aidl"])
            .assert()
            .success()
            .stderr(predicate::str::contains("options resolved"))
            .stderr(predicate::str::contains("\"output_dir\":\"gen\""));
    }
}

// ============================================
// Invalid invocations
// ============================================

mod invalid {
    use super::*;

    #[test]
    fn unsupported_language() {
        aidl()
            .args(["--lang=ruby", "a.aidl"])
            .assert()
            .failure()
            .stderr("Unsupported language: 'ruby'\n");
    }

    #[test]
    fn unknown_flag_with_suggestion() {
        aidl()
            .args(["--trnsaction_names", "a.aidl"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument: '--trnsaction_names'"))
            .stderr(predicate::str::contains("Did you mean '--transaction_names'?"));
    }

    #[test]
    fn legacy_cpp_missing_output() {
        aidl_cpp()
            .args(["IFoo.aidl", "include"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No HEADER_DIR or OUTPUT."));
    }

    #[test]
    fn cpp_binary_rejects_lang() {
        aidl_cpp()
            .args(["--lang=cpp", "-o", "gen", "-h", "inc", "a.aidl"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not support --lang."));
    }

    #[test]
    fn multiple_inputs_single_output() {
        aidl()
            .args(["--lang=cpp", "-o", "gen", "-h", "inc", "-d", "x.d", "a.aidl", "b.aidl"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("-d or --dep doesn't work"));
    }

    #[test]
    fn wrong_extension() {
        aidl()
            .args(["--lang=java", "-o", "gen", "a.aidl", "b.java"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Expected .aidl file for input but got 'b.java'",
            ));
    }
}

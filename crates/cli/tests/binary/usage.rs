use predicates::prelude::*;

use crate::harness::berth_cmd;

#[test]
fn no_args_shows_help() {
    berth_cmd().assert().failure().code(2).stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    berth_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag() {
    berth_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("vars"));
}

#[test]
fn unknown_subcommand() {
    berth_cmd().arg("bogus").assert().failure().code(2);
}

#[test]
fn render_requires_file() {
    berth_cmd().arg("render").assert().failure().code(2).stderr(predicate::str::contains("--file"));
}

#[test]
fn unknown_kind() {
    berth_cmd().args(["render", "-f", "x.json", "--kind", "lambda"]).assert().failure().code(2);
}

//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn sercalc() -> Command {
    Command::cargo_bin("sercalc").expect("binary not found")
}

#[test]
fn help_flag() {
    sercalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("series"));
}

#[test]
fn version_flag() {
    sercalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sercalc"));
}

#[test]
fn default_run_achieves_precision() {
    sercalc()
        .assert()
        .success()
        .stdout(predicate::str::contains("Precision achieved"));
}

#[test]
fn quiet_mode_prints_sum_only() {
    sercalc()
        .args(["-x", "3.0", "-e", "1e-7", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.346573"));
}

#[test]
fn x_ten_with_relaxed_threshold() {
    sercalc()
        .args(["-x", "10.0", "-e", "1e-6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Precision achieved"));
}

#[test]
fn verbose_mode_reports_terms() {
    sercalc()
        .args(["-x", "3.0", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Terms summed"));
}

#[test]
fn undefined_control_still_exits_cleanly() {
    // The comparison proceeds but is flagged; only "no result at all"
    // is a failure exit.
    sercalc()
        .args(["-x", "0.5", "-e", "1e-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undefined"));
}

#[test]
fn negative_x_below_minus_one_is_flagged() {
    sercalc()
        .args(["--x=-3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("undefined"));
}

#[test]
fn invalid_epsilon_is_config_error() {
    sercalc()
        .args(["-x", "3.0", "--epsilon=-1e-7"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn zero_epsilon_is_config_error() {
    sercalc()
        .args(["--epsilon", "0"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn polling_wait_policy() {
    sercalc()
        .args(["--wait-policy", "polling", "--poll-interval", "10ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Precision achieved"));
}

#[test]
fn unknown_wait_policy_is_config_error() {
    sercalc()
        .args(["--wait-policy", "spinning"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn shell_completion_bash() {
    sercalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sercalc"));
}

#[test]
fn shell_completion_zsh() {
    sercalc()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sercalc"));
}

#[test]
fn env_var_sercalc_x() {
    sercalc()
        .env("SERCALC_X", "10.0")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.100335"));
}

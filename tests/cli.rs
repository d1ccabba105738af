use assert_cmd::Command;
use predicates::prelude::*;

fn chalkboard_cmd() -> Command {
    Command::cargo_bin("chalkboard").expect("binary exists")
}

#[test]
fn chalkboard_help_prints_usage() {
    chalkboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Chalkboard drawing toy for Wayland compositors",
        ));
}

#[test]
fn running_requires_wayland_env() {
    chalkboard_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn tool_flag_is_accepted_before_wayland_check() {
    // The flag parses fine; startup still fails on the missing display.
    chalkboard_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .args(["--tool", "duster"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paintapp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("paintapp").expect("binary exists");
    cmd.env_remove("RUST_LOG");
    cmd
}

const CIRCLE_SCRIPT: &str = "\
tool circle
color #ff0000
width 3
down 10 10
move 10 40
up 10 60
";

#[test]
fn paintapp_help_prints_usage() {
    paintapp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shape paint tool with live drag preview",
        ));
}

#[test]
fn paintapp_version_includes_build_profile() {
    paintapp_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "paintapp ",
            env!("CARGO_PKG_VERSION"),
            " ("
        )))
        .stdout(predicate::str::contains(", debug)").or(predicate::str::contains(", release)")));
}

#[test]
fn far_off_canvas_drag_commits_with_debug_logging() {
    paintapp_cmd()
        .env("RUST_LOG", "paintapp=debug")
        .args(["--script", "-", "--data-uri", "--width", "16", "--height", "16"])
        .write_stdin("down -3e9 0\nmove 0 0\nup 3e9 0\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/png;base64,"));
}

#[test]
fn no_script_prints_command_reference() {
    paintapp_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Script commands:"));
}

#[test]
fn script_from_stdin_prints_data_uri() {
    let temp = TempDir::new().unwrap();
    paintapp_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", "-", "--data-uri", "--width", "80", "--height", "80"])
        .write_stdin(CIRCLE_SCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/png;base64,"));
}

#[test]
fn script_file_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("events.txt");
    std::fs::write(&script, CIRCLE_SCRIPT).unwrap();
    let output = temp.path().join("out").join("canvas.png");

    paintapp_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn malformed_script_reports_line() {
    let temp = TempDir::new().unwrap();
    paintapp_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", "-", "--data-uri"])
        .write_stdin("tool line\ndown 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn explicit_config_file_must_parse() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[canvas\nwidth = 3").unwrap();

    paintapp_cmd()
        .args(["--script", "-", "--config"])
        .arg(&config)
        .write_stdin(CIRCLE_SCRIPT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn missing_script_file_fails() {
    let temp = TempDir::new().unwrap();
    paintapp_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script"])
        .arg(temp.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

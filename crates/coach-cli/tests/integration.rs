#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn coach() -> Command {
    Command::cargo_bin("coach-peter").unwrap()
}

// ---------------------------------------------------------------------------
// coach-peter config-line
// ---------------------------------------------------------------------------

#[test]
fn config_line_prints_marker_line() {
    coach()
        .args(["config-line", "<!subteam^SABC|@t>", "<@U1>", "<#CXYZ|general>"])
        .assert()
        .success()
        .stdout(
            r#"coach-peter: {"from":"<!subteam^SABC|@t>","to":["<@U1>","<#CXYZ|general>"]}
"#,
        );
}

#[test]
fn config_line_rejects_bad_receiver() {
    coach()
        .args(["config-line", "<!subteam^SABC>", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid receiver: bob"));
}

#[test]
fn config_line_requires_a_receiver() {
    coach()
        .args(["config-line", "<!subteam^SABC>"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// coach-peter check-phrases
// ---------------------------------------------------------------------------

#[test]
fn check_phrases_accepts_good_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phrases.txt");
    std::fs::write(&path, "{{From}} passes {{Group}} to {{To}}\n\n{{To}} is up\n").unwrap();

    coach()
        .arg("check-phrases")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 templates OK"));
}

#[test]
fn check_phrases_reports_unknown_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phrases.txt");
    std::fs::write(&path, "{{From}} passes to {{To}}\n{{Coach}} blows the whistle\n").unwrap();

    coach()
        .arg("check-phrases")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 templates failed"));
}

#[test]
fn check_phrases_rejects_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phrases.txt");
    std::fs::write(&path, "\n\n").unwrap();

    coach()
        .arg("check-phrases")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("phrase pool is empty"));
}

// ---------------------------------------------------------------------------
// coach-peter serve
// ---------------------------------------------------------------------------

#[test]
fn serve_requires_slack_credentials() {
    coach()
        .arg("serve")
        .env_remove("SLACK_SIGNING_SECRET")
        .env_remove("SLACK_BOT_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--signing-secret"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn write_config(dir: &std::path::Path) -> std::path::PathBuf {
    let config_path = dir.join("app.toml");
    let data_dir = dir.join("data");
    let contents = format!(
        "[storage]\n\
         data_dir = \"{}\"\n\n\
         [onboarding]\n\
         submit_delay_ms = 10\n\
         checklist_window_ms = 70\n\n\
         [voice]\n\
         click_delay_ms = 1\n\
         feedback_ttl_ms = 10\n",
        data_dir.display()
    );
    std::fs::write(&config_path, contents).unwrap();
    config_path
}

#[test]
fn demo_runs_to_completion() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    Command::cargo_bin("tsp-shell")
        .unwrap()
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding checklist complete"))
        .stdout(predicate::str::contains("Voice command matched"))
        .stdout(predicate::str::contains("Share link resolved"))
        .stdout(predicate::str::contains("Demo complete"));
}

#[test]
fn demo_persists_store_state_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path());

    Command::cargo_bin("tsp-shell").unwrap().arg(&config_path).assert().success();

    // The first run persisted grants and settings under the data dir.
    assert!(dir.path().join("data").join("access").exists());
    assert!(dir.path().join("data").join("settings").exists());

    Command::cargo_bin("tsp-shell").unwrap().arg(&config_path).assert().success();
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("tsp-shell")
        .unwrap()
        .arg("/nonexistent/app.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

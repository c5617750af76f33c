use serial_test::serial;
use std::time::Duration;
use tempfile::tempdir;
use tsp_logger::{LevelFilter, Logger, Rotation};

#[test]
#[serial]
fn writes_log_files_to_disk() {
    let tmp = tempdir().unwrap();
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("file-logging")
        .console(false)
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .max_files(3)
        .level(LevelFilter::INFO)
        .init()
        .unwrap();

    tracing::info!("persisted line one");
    tracing::warn!("persisted line two");

    std::thread::sleep(Duration::from_millis(50));
    logger.flush();
    drop(logger);

    let mut found = false;
    for entry in std::fs::read_dir(&log_dir).unwrap().flatten() {
        let content = std::fs::read_to_string(entry.path()).unwrap_or_default();
        if content.contains("persisted line one") && content.contains("persisted line two") {
            found = true;
        }
    }
    assert!(found, "log file should contain both emitted lines");
}

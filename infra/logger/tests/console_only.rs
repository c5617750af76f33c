use serial_test::serial;
use tsp_logger::{LevelFilter, Logger};

#[test]
#[serial]
fn console_only_initializes() {
    let logger = Logger::builder()
        .name("console-only")
        .console(true)
        .level(LevelFilter::DEBUG)
        .init()
        .unwrap();

    tracing::debug!("console logging active");
    assert!(logger.guard().is_none(), "console-only logger should not hold a file worker guard");
}

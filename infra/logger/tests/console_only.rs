use folio_logger::{LevelFilter, Logger};

#[test]
fn init_console_only_keeps_its_name() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!("hello from integration test");
    assert_eq!(logger.name(), "integration-console-only");
}

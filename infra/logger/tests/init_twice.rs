use capgate_logger::{Logger, LoggerError, parse_level};

#[test]
fn only_one_subscriber_per_process() {
    let level = parse_level("debug").expect("known level");
    let _first = Logger::builder()
        .name("capgate")
        .level(level)
        .env_filter("capgate_featuresupport=debug")
        .init()
        .expect("first init should succeed");

    let err = Logger::builder().name("capgate-again").init().expect_err("second init should fail");
    assert_eq!(err.kind(), "Subscriber");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}

#[test]
fn unknown_levels_are_rejected() {
    let err = parse_level("chatty").expect_err("not a level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("chatty"));
}

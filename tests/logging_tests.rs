use log::LevelFilter;
use nqueens::{init_logging, level_from_env};

#[test]
fn test_level_from_env() {
    assert_eq!(level_from_env(None), LevelFilter::Info);
    assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from_env(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from_env(Some("off")), LevelFilter::Off);
    assert_eq!(level_from_env(Some("loud")), LevelFilter::Info);
}

#[test]
fn test_init_logging_is_repeatable() {
    let first = init_logging();
    let second = init_logging();
    assert_eq!(first, second);
}

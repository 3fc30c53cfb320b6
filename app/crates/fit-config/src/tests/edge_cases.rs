use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_database_path_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("FIT_DATABASE_PATH", "../../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("FIT_DATABASE_PATH", "  ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_defaults_to_info() {
    // Given
    let _temp = setup_config_dir();
    let _level = EnvGuard::set("FIT_LOG_LEVEL", "verbose");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_non_numeric_retry_override_when_load_then_keeps_default() {
    // Given
    let _temp = setup_config_dir();
    let _retries = EnvGuard::set("FIT_SYNC_MAX_RETRIES", "three");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.sync.max_retries, eq(3u32));
}

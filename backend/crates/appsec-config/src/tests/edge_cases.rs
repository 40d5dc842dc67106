use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{ConfigError, ConfigReader};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guards) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = ConfigReader::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_non_numeric_company_id_env_when_get_number_then_invalid_type() {
    // Given
    let _temp = setup_config_dir();
    let _company = EnvGuard::set("APPSEC_CONVISO_COMPANY_ID", "acme");

    // When
    let reader = ConfigReader::load().unwrap();
    let result = reader.get_number("conviso.companyId");

    // Then
    assert!(matches!(result, Err(ConfigError::InvalidType { .. })));
}

#[test]
#[serial]
fn given_numeric_api_key_env_when_get_string_then_kept_as_string() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::set("APPSEC_CONVISO_API_KEY", "0042");

    // When
    let reader = ConfigReader::load().unwrap();

    // Then
    assert_eq!(reader.get_string("conviso.x-api-key").unwrap(), "0042");
}

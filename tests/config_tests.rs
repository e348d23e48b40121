use serial_test::serial;
use std::env;
use std::time::Duration;

use moodbuddy::config::Config;
use moodbuddy::errors::AppError;

const VARS: [&str; 5] = [
    "GROQ_API_KEY",
    "UNSPLASH_ACCESS_KEY",
    "MOODBUDDY_MODEL",
    "MOODBUDDY_COMPLETION_URL",
    "MOODBUDDY_IMAGE_TIMEOUT_SECS",
];

fn save_vars() -> Vec<(&'static str, Option<String>)> {
    VARS.iter().map(|name| (*name, env::var(name).ok())).collect()
}

fn restore_vars(saved: Vec<(&'static str, Option<String>)>) {
    for (name, value) in saved {
        match value {
            Some(val) => env::set_var(name, val),
            None => env::remove_var(name),
        }
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let saved = save_vars();

    env::set_var("GROQ_API_KEY", "gsk_test");
    env::set_var("UNSPLASH_ACCESS_KEY", "  ");
    env::set_var("MOODBUDDY_MODEL", "mixtral-8x7b-32768");
    env::set_var("MOODBUDDY_COMPLETION_URL", "http://localhost:8080/v1");
    env::set_var("MOODBUDDY_IMAGE_TIMEOUT_SECS", "3");

    let config = Config::load();
    restore_vars(saved);

    let config = config.unwrap();
    assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
    // Blank values count as unset
    assert_eq!(config.image_key, None);
    assert_eq!(config.model, "mixtral-8x7b-32768");
    assert_eq!(config.completion_url, "http://localhost:8080/v1");
    assert_eq!(config.image_timeout, Duration::from_secs(3));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_config_load_rejects_bad_timeout() {
    let saved = save_vars();
    env::set_var("MOODBUDDY_IMAGE_TIMEOUT_SECS", "soon");

    let result = Config::load();
    restore_vars(saved);

    match result {
        Err(AppError::Config(msg)) => assert!(msg.contains("MOODBUDDY_IMAGE_TIMEOUT_SECS")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_config_validate_rejects_non_http_url() {
    let saved = save_vars();
    env::set_var("MOODBUDDY_COMPLETION_URL", "ftp://example.com");

    let config = Config::load();
    restore_vars(saved);

    assert!(matches!(
        config.unwrap().validate(),
        Err(AppError::Config(_))
    ));
}

use super::*;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test in this module touches the env.
unsafe fn clear_fetch_env() {
    unsafe {
        std::env::remove_var("CODEBOARD_BASE_URL");
        std::env::remove_var("CODEBOARD_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("CODEBOARD_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("CODEBOARD_MAX_SOURCE_BYTES");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_fetch_env() };

    let cfg = FetchConfig::from_env().unwrap();
    assert_eq!(cfg, FetchConfig::default());
    assert_eq!(cfg.base_url, None);
    assert_eq!(
        cfg.timeouts,
        FetchTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.max_source_bytes, DEFAULT_MAX_SOURCE_BYTES);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_fetch_env();
        std::env::set_var("CODEBOARD_BASE_URL", "https://example.test/repo");
        std::env::set_var("CODEBOARD_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("CODEBOARD_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("CODEBOARD_MAX_SOURCE_BYTES", "1024");
    }

    let cfg = FetchConfig::from_env().unwrap();
    assert_eq!(cfg.base_url.as_deref(), Some("https://example.test/repo/"));
    assert_eq!(cfg.timeouts, FetchTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.max_source_bytes, 1024);

    unsafe { clear_fetch_env() };
}

#[test]
fn from_env_ignores_unparseable_numbers() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_fetch_env();
        std::env::set_var("CODEBOARD_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = FetchConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_fetch_env() };
}

#[test]
fn from_env_blank_base_url_is_unset() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_fetch_env();
        std::env::set_var("CODEBOARD_BASE_URL", "   ");
    }

    let cfg = FetchConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, None);

    unsafe { clear_fetch_env() };
}

#[test]
fn from_env_rejects_relative_base_url() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_fetch_env();
        std::env::set_var("CODEBOARD_BASE_URL", "src/");
    }

    let err = FetchConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid CODEBOARD_BASE_URL"));

    unsafe { clear_fetch_env() };
}

#[test]
fn with_base_url_rejects_non_http_scheme() {
    let err = FetchConfig::default()
        .with_base_url("ftp://example.test/")
        .unwrap_err()
        .to_string();
    assert!(err.contains("unsupported CODEBOARD_BASE_URL scheme 'ftp'"));
}

#[test]
fn with_base_url_keeps_existing_trailing_slash() {
    let cfg = FetchConfig::default()
        .with_base_url("http://localhost:5173/")
        .unwrap();
    assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:5173/"));
}

use screener::ScreenerConfig;
use screener::client::cookie_header;
use screener::settings::DEFAULT_BASE_URL;

#[test]
fn defaults_without_file() {
    let config = ScreenerConfig::from_toml("").unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.cookies.is_empty());
    assert!(config.user_agent.starts_with("screener/"));
}

#[test]
fn toml_overrides_and_cookies() {
    let config = ScreenerConfig::from_toml(
        r#"
        base_url = "http://localhost:9000/"
        user_agent = "tests"

        [cookies]
        sessionid = "abc"
        device_t = "xyz"
        "#,
    )
    .unwrap();
    assert_eq!(config.user_agent, "tests");
    assert_eq!(config.scan_url("america"), "http://localhost:9000/america/scan");
    assert_eq!(cookie_header(&config.cookies).as_deref(), Some("device_t=xyz; sessionid=abc"));
}

#[test]
fn no_cookie_header_when_empty() {
    assert_eq!(cookie_header(&Default::default()), None);
}

#[test]
fn missing_file_is_not_an_error() {
    let config = ScreenerConfig::load(Some("does-not-exist.toml")).unwrap();
    assert!(!config.base_url.is_empty());
}

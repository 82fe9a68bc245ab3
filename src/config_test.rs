use super::*;

#[test]
fn default_config_matches_stock_page() {
    let config = PortfolioConfig::default();
    assert_eq!(config.skills.len(), 5);
    assert_eq!(config.skills[0], "Python");
    assert_eq!(config.pressed_link_hosts, vec!["linkedin.com".to_owned()]);
    assert!(config.recipient.contains('@'));
}

#[test]
fn partial_block_keeps_defaults_for_missing_fields() {
    let config = PortfolioConfig::from_json(r#"{"skills": ["Rust", "Go"]}"#).unwrap();
    assert_eq!(config.skills, vec!["Rust".to_owned(), "Go".to_owned()]);
    assert_eq!(config.recipient, PortfolioConfig::default().recipient);
}

#[test]
fn camel_case_keys_are_accepted() {
    let config = PortfolioConfig::from_json(r#"{"typingPrefix": "Engineer | "}"#).unwrap();
    assert_eq!(config.typing_prefix, "Engineer | ");
}

#[test]
fn malformed_block_is_an_error() {
    let err = PortfolioConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PortfolioError::Config(_)));
}

#[test]
fn resolve_falls_back_to_defaults() {
    assert_eq!(PortfolioConfig::resolve(None), PortfolioConfig::default());
    assert_eq!(PortfolioConfig::resolve(Some("   ")), PortfolioConfig::default());
    assert_eq!(PortfolioConfig::resolve(Some(r#"{"skills": 3}"#)), PortfolioConfig::default());
}

#[test]
fn resolve_uses_valid_block() {
    let config = PortfolioConfig::resolve(Some(r#"{"recipient": "me@example.com"}"#));
    assert_eq!(config.recipient, "me@example.com");
}

use super::*;

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(config_from_block(None), SiteConfig::default());
    assert_eq!(config_from_block(Some("   \n ")), SiteConfig::default());
}

#[test]
fn valid_block_is_applied() {
    let config = config_from_block(Some(r#"{ "loader_delay_ms": 300 }"#));
    assert_eq!(config.loader_delay_ms, 300);
}

#[test]
fn invalid_block_falls_back_to_defaults() {
    assert_eq!(config_from_block(Some("{ \"counter_threshold\": 4 }")), SiteConfig::default());
    assert_eq!(config_from_block(Some("not json")), SiteConfig::default());
}

#[test]
fn load_site_config_outside_browser_is_default() {
    assert_eq!(load_site_config(), SiteConfig::default());
}

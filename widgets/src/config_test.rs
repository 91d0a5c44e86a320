use super::*;

#[test]
fn default_matches_stock_page_timings() {
    let config = SiteConfig::default();
    assert_eq!(config.loader_delay_ms, 1000);
    assert_eq!(config.counter_threshold, 0.5);
    assert_eq!(config.counter_duration_ms, 2000.0);
    assert_eq!(config.frame_interval_ms, 16.0);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn from_json_empty_object_uses_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let config = SiteConfig::from_json(r#"{ "loader_delay_ms": 250, "theme_storage_key": "site_theme" }"#)
        .expect("partial config should parse");
    assert_eq!(config.loader_delay_ms, 250);
    assert_eq!(config.theme_storage_key, "site_theme");
    assert_eq!(config.counter_threshold, 0.5);
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, WidgetError::Config(_)));
}

#[test]
fn from_json_rejects_threshold_out_of_range() {
    let err = SiteConfig::from_json(r#"{ "counter_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, WidgetError::Config(msg) if msg.contains("counter_threshold")));
}

#[test]
fn from_json_rejects_zero_frame_interval() {
    let err = SiteConfig::from_json(r#"{ "frame_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, WidgetError::Config(msg) if msg.contains("frame_interval_ms")));
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = SiteConfig::from_json(r#"{ "theme_storage_key": "  " }"#).unwrap_err();
    assert!(matches!(err, WidgetError::Config(_)));
}

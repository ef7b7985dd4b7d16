use fracs::{Order, Property, RankConfig, Rect, ScrollConfig};

#[test]
fn test_rank_config_defaults() {
    let config = RankConfig::default();
    assert_eq!(config.property, Property::Visible);
    assert_eq!(config.order, Order::Descending);
}

#[test]
fn test_rank_config_builder() {
    let config = RankConfig::new(Property::Top).ascending();
    assert_eq!(config.property, Property::Top);
    assert_eq!(config.order, Order::Ascending);
    assert_eq!(config.descending().order, Order::Descending);
}

#[test]
fn test_rank_config_from_json() {
    let config: RankConfig =
        serde_json::from_str(r#"{"property": "possible", "order": "ascending"}"#).unwrap();
    assert_eq!(config, RankConfig::new(Property::Possible).ascending());

    let partial: RankConfig = serde_json::from_str(r#"{"property": "bottom"}"#).unwrap();
    assert_eq!(partial.order, Order::Descending);
}

#[test]
fn test_rank_config_rejects_unknown_property() {
    let result = serde_json::from_str::<RankConfig>(r#"{"property": "depth"}"#);
    assert!(result.is_err());
}

#[test]
fn test_scroll_config() {
    assert_eq!(ScrollConfig::default(), ScrollConfig::new().padding(0, 0));

    let config: ScrollConfig = serde_json::from_str(r#"{"padding_top": 12}"#).unwrap();
    assert_eq!(config.padding_left, 0);
    assert_eq!(config.padding_top, 12);
}

#[test]
fn test_rect_serializes_stored_fields() {
    let json = serde_json::to_value(Rect::new(1, 2, 3, 4)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"left": 1, "top": 2, "width": 3, "height": 4})
    );
}

use picklist::PicklistError;
use picklist::collection::SortOrder;
use picklist::config::{Flavor, PicklistConfig, PositionConfig};
use picklist::item::Item;
use picklist::selection::SelectionMode;

#[test]
fn test_defaults() {
    let config = PicklistConfig::default();
    assert_eq!(config.flavor, Flavor::Select);
    assert_eq!(config.selection_mode, SelectionMode::Single);
    assert_eq!(config.sort, SortOrder::None);
    assert!(!config.filterable);
    assert!(!config.disabled);
    assert_eq!(config.no_results_message, "No results found");
    assert_eq!(config.result_limit, 50);
    assert_eq!(config.position, PositionConfig::default());
    assert_eq!(config.position.max_height, 580.0);
    assert_eq!(config.position.margin, 12.0);
}

#[test]
fn test_deserialize_partial_json() {
    let config: PicklistConfig = serde_json::from_str(
        r#"{
            "flavor": "multi_select",
            "selection_mode": "multi",
            "sort": "desc",
            "filterable": true,
            "position": { "margin": 8 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.flavor, Flavor::MultiSelect);
    assert_eq!(config.selection_mode, SelectionMode::Multi);
    assert_eq!(config.sort, SortOrder::Desc);
    assert!(config.filterable);
    assert_eq!(config.no_results_message, "No results found");
    assert_eq!(config.position.margin, 8.0);
    assert_eq!(config.position.max_height, 580.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_multi_on_single_flavor() {
    let config = PicklistConfig::new(Flavor::Select).with_selection_mode(SelectionMode::Multi);
    assert!(matches!(config.validate(), Err(PicklistError::MultiSelectUnsupported)));
}

#[test]
fn test_builder() {
    let config = PicklistConfig::new(Flavor::MultiSelect)
        .with_no_results_message("Nothing here")
        .with_result_limit(10)
        .with_position(PositionConfig::default().force_right());
    assert_eq!(config.no_results_message, "Nothing here");
    assert_eq!(config.result_limit, 10);
    assert!(config.position.force_right);
}

#[test]
fn test_deserialize_items() {
    let items: Vec<Item> = serde_json::from_str(
        r#"[
            { "id": "1", "label": "One", "selected": true },
            { "id": "2", "label": "Two", "disabled": true, "exclude_from_select_all": true }
        ]"#,
    )
    .unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].selected);
    assert!(items[1].disabled && items[1].exclude_from_select_all);
    assert_eq!(items[1].content, "");
}

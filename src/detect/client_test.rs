use super::*;
use crate::detect::types::FileType;

// =============================================================================
// storage_query — unset filters omitted entirely
// =============================================================================

#[test]
fn storage_query_without_filters_has_only_pagination() {
    let query = storage_query(&StorageFilter::default());
    let keys: Vec<&str> = query.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["page", "page_size"]);
}

#[test]
fn storage_query_defaults_first_page_of_ten() {
    let query = storage_query(&StorageFilter::default());
    assert_eq!(query[0], ("page", "1".to_string()));
    assert_eq!(query[1], ("page_size", "10".to_string()));
}

#[test]
fn storage_query_includes_file_type_when_set() {
    let filter = StorageFilter { file_type: Some(FileType::PredictedVideo), ..StorageFilter::default() };
    let query = storage_query(&filter);
    assert!(query.contains(&("file_type", "predicted_video".to_string())));
    assert!(!query.iter().any(|(k, _)| *k == "file_id"));
}

#[test]
fn storage_query_includes_file_id_when_set() {
    let filter = StorageFilter { file_id: Some(42), page: 3, page_size: 25, ..StorageFilter::default() };
    let query = storage_query(&filter);
    assert!(query.contains(&("file_id", "42".to_string())));
    assert!(query.contains(&("page", "3".to_string())));
    assert!(query.contains(&("page_size", "25".to_string())));
}

// =============================================================================
// training_log_query — None means "from start", parameter omitted
// =============================================================================

#[test]
fn training_log_query_omits_param_when_unset() {
    assert!(training_log_query(None).is_empty());
}

#[test]
fn training_log_query_includes_offset_when_set() {
    assert_eq!(training_log_query(Some(120)), vec![("line_no", "120".to_string())]);
}

// =============================================================================
// Path builders
// =============================================================================

#[test]
fn endpoint_paths_embed_ids() {
    assert_eq!(prediction_data_path(7), "/prediction-data/7");
    assert_eq!(validation_data_path(12), "/validation-data/12");
    assert_eq!(stop_training_path(4211), "/stop-training/4211");
    assert_eq!(show_training_path(4211), "/show-training/4211");
}

#[test]
fn page_query_renders_both_keys() {
    let query = page_query(Page { page: 2, page_size: 50 });
    assert_eq!(query, vec![("page", "2".to_string()), ("page_size", "50".to_string())]);
}

// =============================================================================
// Client construction
// =============================================================================

#[test]
fn from_config_strips_no_trailing_slash_twice() {
    let config = crate::detect::config::DetectConfig {
        base_url: "http://detect.internal:9000".to_string(),
        timeouts: crate::detect::config::DetectTimeouts { request_secs: 5, connect_secs: 2 },
    };
    let client = DetectClient::from_config(config).unwrap();
    assert_eq!(client.base_url(), "http://detect.internal:9000");
}

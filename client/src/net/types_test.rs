use super::*;

// =============================================================
// Selector enums
// =============================================================

#[test]
fn gender_parse_accepts_fixed_values() {
    assert_eq!(Gender::parse("Male"), Some(Gender::Male));
    assert_eq!(Gender::parse("Female"), Some(Gender::Female));
}

#[test]
fn gender_parse_rejects_other_values() {
    assert_eq!(Gender::parse(""), None);
    assert_eq!(Gender::parse("male"), None);
}

#[test]
fn stream_labels_match_selector_options() {
    let labels: Vec<&str> = Stream::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Computer Science", "Information Technology", "Electronics", "Mechanical", "Civil"]
    );
}

#[test]
fn stream_parse_inverts_as_str() {
    for stream in Stream::ALL {
        assert_eq!(Stream::parse(stream.as_str()), Some(stream));
    }
    assert_eq!(Stream::parse("Chemical"), None);
}

// =============================================================
// PredictionResult decoding
// =============================================================

#[test]
fn prediction_result_decodes_expected_shape() {
    let body = r#"{"placement_message":"You have high chances of placement","job_role_prediction":"Backend Engineer"}"#;
    let result: PredictionResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.placement_message, "You have high chances of placement");
    assert_eq!(result.job_role_prediction, "Backend Engineer");
}

#[test]
fn prediction_result_missing_fields_default_to_empty() {
    let result: PredictionResult = serde_json::from_str(r#"{"placement_message":"Limited chances"}"#).unwrap();
    assert_eq!(result.placement_message, "Limited chances");
    assert_eq!(result.job_role_prediction, "");

    let empty: PredictionResult = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, PredictionResult::default());
}

#[test]
fn prediction_result_null_fields_render_empty() {
    let body = r#"{"placement_message":"You have high chances of placement","job_role_prediction":null}"#;
    let result: PredictionResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.placement_message, "You have high chances of placement");
    assert_eq!(result.job_role_prediction, "");
    assert_eq!(result.tone(), PlacementTone::Success);
}

#[test]
fn prediction_result_non_string_scalars_render_as_text() {
    let body = r#"{"placement_message":false,"job_role_prediction":3}"#;
    let result: PredictionResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.placement_message, "false");
    assert_eq!(result.job_role_prediction, "3");
}

#[test]
fn prediction_result_ignores_unknown_fields() {
    let body = r#"{"placement_message":"ok","job_role_prediction":"QA","confidence":0.7}"#;
    let result: PredictionResult = serde_json::from_str(body).unwrap();
    assert_eq!(result.job_role_prediction, "QA");
}

// =============================================================
// PlacementTone
// =============================================================

#[test]
fn tone_is_success_when_message_mentions_high_chances() {
    let result = PredictionResult {
        placement_message: "You have high chances of placement".to_owned(),
        job_role_prediction: "Backend Engineer".to_owned(),
    };
    assert_eq!(result.tone(), PlacementTone::Success);
}

#[test]
fn tone_is_warning_otherwise() {
    let result = PredictionResult {
        placement_message: "Limited chances".to_owned(),
        job_role_prediction: "N/A".to_owned(),
    };
    assert_eq!(result.tone(), PlacementTone::Warning);
}

#[test]
fn tone_match_is_case_sensitive() {
    let result = PredictionResult { placement_message: "High Chances".to_owned(), ..Default::default() };
    assert_eq!(result.tone(), PlacementTone::Warning);
}

#[test]
fn tone_classes_are_distinct() {
    assert_ne!(PlacementTone::Success.class(), PlacementTone::Warning.class());
    assert!(PlacementTone::Success.class().contains("--success"));
}

use super::*;
use crate::net::api::{GENERIC_ERROR_MESSAGE, PredictError};

fn make_result(placement_message: &str, job_role_prediction: &str) -> PredictionResult {
    PredictionResult {
        placement_message: placement_message.to_owned(),
        job_role_prediction: job_role_prediction.to_owned(),
    }
}

#[test]
fn placement_icon_differs_by_tone() {
    assert_eq!(placement_icon(PlacementTone::Success), "✔");
    assert_eq!(placement_icon(PlacementTone::Warning), "⚠");
}

#[test]
fn placement_banner_high_chances_uses_success_treatment() {
    let result = make_result("You have high chances of placement", "Backend Engineer");
    assert_eq!(
        placement_banner(&result),
        ("placement-banner placement-banner--success", "✔")
    );
}

#[test]
fn placement_banner_limited_chances_uses_warning_treatment() {
    let result = make_result("Limited chances", "N/A");
    assert_eq!(
        placement_banner(&result),
        ("placement-banner placement-banner--warning", "⚠")
    );
}

#[test]
fn error_banner_hidden_while_idle() {
    assert_eq!(error_banner_text(&PredictState::default()), None);
}

#[test]
fn error_banner_shows_generic_message_after_failure() {
    let mut state = PredictState::default();
    state.begin_submit().unwrap();
    state.finish_submit(Err(PredictError::Status(500)));
    assert_eq!(error_banner_text(&state).as_deref(), Some(GENERIC_ERROR_MESSAGE));
    assert!(state.prediction.is_none());
}

#[test]
fn error_banner_cleared_after_success() {
    let mut state = PredictState::default();
    state.begin_submit().unwrap();
    state.finish_submit(Err(PredictError::Network("connection refused".to_owned())));
    state.begin_submit().unwrap();
    state.finish_submit(Ok(make_result("Limited chances", "N/A")));
    assert_eq!(error_banner_text(&state), None);
}

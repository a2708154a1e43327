//! Outcome area below the form: error banner and prediction panels.
//!
//! The error banner and the prediction panels are driven by independent
//! fields, so both can be visible at once after a failed retry.

#[cfg(test)]
#[path = "prediction_result_test.rs"]
mod prediction_result_test;

use leptos::prelude::*;

use crate::net::types::{PlacementTone, PredictionResult};
use crate::state::predict::PredictState;

fn placement_icon(tone: PlacementTone) -> &'static str {
    match tone {
        PlacementTone::Success => "✔",
        PlacementTone::Warning => "⚠",
    }
}

/// Banner class and icon for a prediction.
fn placement_banner(result: &PredictionResult) -> (&'static str, &'static str) {
    let tone = result.tone();
    (tone.class(), placement_icon(tone))
}

/// Text for the red banner, if one should be shown.
fn error_banner_text(state: &PredictState) -> Option<String> {
    state.error.clone()
}

/// Error banner, then placement banner and job-role panel when present.
#[component]
pub fn PredictionResultPanel(state: RwSignal<PredictState>) -> impl IntoView {
    let error = move || state.with(error_banner_text);
    let prediction = move || state.with(|s| s.prediction.clone());

    view! {
        <div class="predict-card__footer">
            <Show when=move || error().is_some()>
                <div class="error-banner" role="alert">
                    <span class="error-banner__icon" aria-hidden="true">"⚠"</span>
                    <p>{move || error().unwrap_or_default()}</p>
                </div>
            </Show>
            {move || {
                prediction()
                    .map(|result| {
                        let (banner_class, banner_icon) = placement_banner(&result);
                        view! {
                            <div class="prediction-result">
                                <div class=banner_class>
                                    <span class="placement-banner__icon" aria-hidden="true">
                                        {banner_icon}
                                    </span>
                                    <p class="placement-banner__message">{result.placement_message}</p>
                                </div>
                                <div class="job-role-panel">
                                    <span class="job-role-panel__icon" aria-hidden="true">"💼"</span>
                                    <div>
                                        <p class="job-role-panel__label">"Predicted Job Role:"</p>
                                        <p class="job-role-panel__value">{result.job_role_prediction}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

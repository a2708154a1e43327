//! Placement prediction form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. DOM events write into the `PredictState` context signal;
//! submit snapshots the form, posts it to the predict service once, and
//! records the outcome. Required-ness and numeric bounds are left to the
//! native input constraints.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use leptos::prelude::*;

use crate::components::prediction_result::PredictionResultPanel;
use crate::net::api::ResumeHandle;
use crate::net::types::{Gender, Stream};
use crate::state::predict::{FormField, PredictState, RESUME_ACCEPT};

/// Clamp a browser-reported byte count into `u64`.
#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn file_size(bytes: f64) -> u64 {
    if bytes.is_finite() && bytes > 0.0 { bytes as u64 } else { 0 }
}

#[component]
pub fn PredictPage() -> impl IntoView {
    let state = expect_context::<RwSignal<PredictState>>();
    let resume_handle = StoredValue::new_local(None::<ResumeHandle>);

    let on_field = move |field: FormField| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            state.update(|s| s.update_field(field, &value));
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(files) = input.files() else {
                return;
            };
            let file = files.get(0);
            let meta = file.as_ref().map(|f| crate::state::predict::ResumeFile {
                name: f.name(),
                size: file_size(f.size()),
                mime: f.type_(),
            });
            resume_handle.set_value(file);
            state.update(|s| s.update_file(meta));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = state.try_update(PredictState::begin_submit).flatten() else {
            return;
        };
        let resume = resume_handle.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let endpoint = crate::config::predict_endpoint();
            let outcome = crate::net::api::submit_prediction(endpoint, &submission.fields, resume).await;
            match &outcome {
                Ok(result) => log::debug!("prediction received: {}", result.placement_message),
                Err(e) => log::warn!("prediction failed ({endpoint}): {e}"),
            }
            state.update(|s| s.finish_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (submission, resume);
    };

    let busy = move || state.with(PredictState::is_busy);
    let resume_name = move || state.with(|s| s.form.resume.as_ref().map(|r| r.name.clone()));

    view! {
        <div class="predict-page">
            <div class="predict-card">
                <header class="predict-card__header">
                    <h1 class="predict-card__title">
                        <span aria-hidden="true">"🎓"</span>
                        " Placement Predictor"
                    </h1>
                    <p class="predict-card__subtitle">
                        "Discover your career potential with AI-powered insights"
                    </p>
                </header>
                <form class="predict-form" on:submit=on_submit>
                    <div class="predict-form__grid">
                        <div class="predict-form__field">
                            <label for="gender">"Gender"</label>
                            <select id="gender" name="gender" required on:change=on_field(FormField::Gender)>
                                <option value="" disabled selected>"Select gender"</option>
                                {Gender::ALL
                                    .into_iter()
                                    .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="predict-form__field">
                            <label for="stream">"Stream"</label>
                            <select id="stream" name="stream" required on:change=on_field(FormField::Stream)>
                                <option value="" disabled selected>"Select stream"</option>
                                {Stream::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="predict-form__field">
                            <label for="internship">"Internships"</label>
                            <input
                                type="number"
                                id="internship"
                                name="internship"
                                required
                                on:input=on_field(FormField::Internship)
                            />
                        </div>
                        <div class="predict-form__field">
                            <label for="cgpa">"CGPA"</label>
                            <input
                                type="number"
                                id="cgpa"
                                name="cgpa"
                                step="0.01"
                                min="0"
                                max="10"
                                required
                                on:input=on_field(FormField::Cgpa)
                            />
                        </div>
                        <div class="predict-form__field">
                            <label for="backlogs">"Backlogs"</label>
                            <input
                                type="number"
                                id="backlogs"
                                name="backlogs"
                                required
                                on:input=on_field(FormField::Backlogs)
                            />
                        </div>
                        <div class="predict-form__field">
                            <span class="predict-form__label">"Resume (PDF or DOCX)"</span>
                            <input
                                type="file"
                                id="resume"
                                name="resume"
                                class="visually-hidden"
                                accept=RESUME_ACCEPT
                                required
                                on:change=on_file_change
                            />
                            <label for="resume" class="btn btn--outline upload-button">
                                <span aria-hidden="true">"⇪"</span>
                                " Upload Resume"
                            </label>
                            <Show when=move || resume_name().is_some()>
                                <p class="predict-form__file-name">{move || resume_name().unwrap_or_default()}</p>
                            </Show>
                        </div>
                    </div>
                    <button class="btn btn--primary predict-form__submit" type="submit" disabled=busy>
                        {move || state.with(PredictState::submit_label)}
                    </button>
                </form>
                <PredictionResultPanel state=state/>
            </div>
        </div>
    }
}

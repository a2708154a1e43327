//! HTTP client for the external predict service.
//!
//! Client-side (hydrate): a real multipart `POST` via `gloo-net`.
//! Server-side (SSR): a stub returning [`PredictError::Unavailable`], since a
//! submission only ever starts from a browser event.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (non-2xx status, transport error, undecodable body) becomes a
//! typed [`PredictError`] so the caller can log the cause. Users only ever see
//! [`GENERIC_ERROR_MESSAGE`]; no retry is attempted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::PredictionResult;

/// The one message shown for every failed submission.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while fetching the prediction. Please try again.";

/// Multipart field name carrying the resume attachment.
pub const RESUME_FIELD: &str = "resumeFile";

/// Browser file handle moved into the multipart body.
#[cfg(feature = "hydrate")]
pub type ResumeHandle = web_sys::File;

/// Server renders never hold a file, so the handle is uninhabited there.
#[cfg(not(feature = "hydrate"))]
pub type ResumeHandle = std::convert::Infallible;

/// Errors produced while requesting a prediction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-success HTTP status.
    #[error("predict request failed: status {0}")]
    Status(u16),

    /// The request never completed (connection refused, CORS, aborted).
    #[error("predict request failed: {0}")]
    Network(String),

    /// The response body was not a prediction object.
    #[error("predict response parse failed: {0}")]
    Decode(String),

    /// The multipart body could not be assembled.
    #[error("multipart body build failed: {0}")]
    Body(String),

    /// Submission attempted outside the browser.
    #[error("predict requests are only available in the browser")]
    Unavailable,
}

impl PredictError {
    /// User-facing text; causes are deliberately indistinguishable.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), PredictError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(PredictError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_prediction(body: &str) -> Result<PredictionResult, PredictError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| PredictError::Decode(e.to_string()))?;
    // serde would otherwise accept a positional array as the struct.
    if !value.is_object() {
        return Err(PredictError::Decode("expected a JSON object".to_owned()));
    }
    serde_json::from_value(value).map_err(|e| PredictError::Decode(e.to_string()))
}

/// `POST` the form fields and optional resume to `endpoint` as multipart data.
///
/// Exactly one request is issued per call. No timeout is configured; the
/// future resolves when the browser resolves the fetch.
///
/// # Errors
///
/// Returns [`PredictError`] if the body cannot be built, the request fails,
/// the status is outside 2xx, or the body is not a prediction object.
pub async fn submit_prediction(
    endpoint: &str,
    fields: &[(&'static str, String)],
    resume: Option<ResumeHandle>,
) -> Result<PredictionResult, PredictError> {
    #[cfg(feature = "hydrate")]
    {
        let js_err = |e: wasm_bindgen::JsValue| PredictError::Body(format!("{e:?}"));

        let body = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in fields {
            body.append_with_str(name, value).map_err(js_err)?;
        }
        if let Some(file) = resume.as_ref() {
            body.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())
                .map_err(js_err)?;
        }

        let resp = gloo_net::http::Request::post(endpoint)
            .body(body)
            .map_err(|e| PredictError::Body(e.to_string()))?
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let text = resp.text().await.map_err(|e| PredictError::Network(e.to_string()))?;
        decode_prediction(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, fields, resume);
        Err(PredictError::Unavailable)
    }
}

//! Prediction form state and submission lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PredictState` is provided as an `RwSignal` by `App` and driven by the
//! predict page: DOM events write fields, the submit handler calls
//! [`PredictState::begin_submit`] and later [`PredictState::finish_submit`].
//!
//! DESIGN
//! ======
//! `error` and `prediction` are independent options rather than one enum.
//! Field edits never touch them, and a failed attempt leaves an earlier
//! prediction on screen until a later attempt succeeds. The busy flag is the
//! only guard against overlapping submissions; it disables the button and
//! also makes `begin_submit` refuse while a request is in flight.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use crate::net::api::PredictError;
use crate::net::types::{Gender, PredictionResult, Stream};

/// Submit button text while idle.
pub const SUBMIT_LABEL_IDLE: &str = "Predict My Future";

/// Submit button text while a request is outstanding.
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing...";

/// File-picker accept filter. Advisory only; not re-checked before sending.
pub const RESUME_ACCEPT: &str = ".pdf,.docx";

/// Scalar form inputs, in multipart order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Gender,
    Stream,
    Internship,
    Cgpa,
    Backlogs,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Gender,
        FormField::Stream,
        FormField::Internship,
        FormField::Cgpa,
        FormField::Backlogs,
    ];

    /// Multipart field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Stream => "stream",
            Self::Internship => "internship",
            Self::Cgpa => "cgpa",
            Self::Backlogs => "backlogs",
        }
    }
}

/// Metadata of the selected resume. The binary handle stays in the browser layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Everything the user has entered so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub gender: Option<Gender>,
    pub stream: Option<Stream>,
    pub internship: String,
    pub cgpa: String,
    pub backlogs: String,
    pub resume: Option<ResumeFile>,
}

impl FormState {
    /// Write one field. Selector values outside the fixed set unset the field;
    /// numeric fields are stored verbatim.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Gender => self.gender = Gender::parse(value),
            FormField::Stream => self.stream = Stream::parse(value),
            FormField::Internship => value.clone_into(&mut self.internship),
            FormField::Cgpa => value.clone_into(&mut self.cgpa),
            FormField::Backlogs => value.clone_into(&mut self.backlogs),
        }
    }

    /// Current value as it would be sent; unset selectors read as empty.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Gender => self.gender.map_or("", Gender::as_str),
            FormField::Stream => self.stream.map_or("", Stream::as_str),
            FormField::Internship => &self.internship,
            FormField::Cgpa => &self.cgpa,
            FormField::Backlogs => &self.backlogs,
        }
    }

    /// Scalar multipart parts in submission order.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        FormField::ALL
            .into_iter()
            .map(|field| (field.name(), self.value(field).to_owned()))
            .collect()
    }
}

/// Snapshot of the form taken when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub fields: Vec<(&'static str, String)>,
    pub resume: Option<ResumeFile>,
}

/// Form inputs plus the outcome of the latest submission.
#[derive(Clone, Debug, Default)]
pub struct PredictState {
    pub form: FormState,
    pub prediction: Option<PredictionResult>,
    pub error: Option<String>,
    pub loading: bool,
}

impl PredictState {
    /// Apply a field edit. Outcome fields are left untouched.
    pub fn update_field(&mut self, field: FormField, value: &str) {
        self.form.set_field(field, value);
    }

    /// Replace the resume with the picker's first file; an empty pick clears it.
    pub fn update_file(&mut self, first: Option<ResumeFile>) {
        self.form.resume = first;
    }

    /// Start a submission. Returns `None` while a request is already in flight.
    ///
    /// Sets the busy flag and clears the previous error; a previous prediction
    /// stays visible until [`Self::finish_submit`] replaces it.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Submission { fields: self.form.multipart_fields(), resume: self.form.resume.clone() })
    }

    /// Record a resolved submission. Always clears the busy flag.
    pub fn finish_submit(&mut self, outcome: Result<PredictionResult, PredictError>) {
        match outcome {
            Ok(result) => {
                self.prediction = Some(result);
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message().to_owned()),
        }
        self.loading = false;
    }

    pub fn is_busy(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL_IDLE }
    }
}

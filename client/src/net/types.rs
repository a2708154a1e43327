//! Wire-level DTOs for the `/predict` boundary.
//!
//! DESIGN
//! ======
//! The selector enums carry the exact strings the predict service expects in
//! the multipart body. `PredictionResult` is decoded leniently: unknown fields
//! are ignored, missing or `null` ones become empty strings, and other scalars
//! are rendered as their JSON text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer};

/// Substring of `placement_message` that selects the success treatment.
pub const HIGH_CHANCES_MARKER: &str = "high chances";

/// Gender selector values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Wire and display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Parse a selector value; anything outside the fixed set yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == raw)
    }
}

/// Academic stream selector values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    ComputerScience,
    InformationTechnology,
    Electronics,
    Mechanical,
    Civil,
}

impl Stream {
    pub const ALL: [Stream; 5] = [
        Stream::ComputerScience,
        Stream::InformationTechnology,
        Stream::Electronics,
        Stream::Mechanical,
        Stream::Civil,
    ];

    /// Wire and display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::InformationTechnology => "Information Technology",
            Self::Electronics => "Electronics",
            Self::Mechanical => "Mechanical",
            Self::Civil => "Civil",
        }
    }

    /// Parse a selector value; anything outside the fixed set yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Visual treatment of the placement banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementTone {
    /// Green banner with a check icon.
    Success,
    /// Yellow banner with an alert icon.
    Warning,
}

impl PlacementTone {
    /// CSS modifier class for the banner.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "placement-banner placement-banner--success",
            Self::Warning => "placement-banner placement-banner--warning",
        }
    }
}

/// Prediction returned by the predict service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PredictionResult {
    /// Free-text placement verdict.
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub placement_message: String,
    /// Free-text predicted job role.
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub job_role_prediction: String,
}

/// Accept any JSON value as display text: `null` is empty, strings are kept
/// verbatim, everything else renders as its JSON text.
fn deserialize_display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}

impl PredictionResult {
    /// Banner treatment derived from the placement message.
    ///
    /// This is a case-sensitive substring match on [`HIGH_CHANCES_MARKER`];
    /// the service exposes no structured verdict field.
    pub fn tone(&self) -> PlacementTone {
        if self.placement_message.contains(HIGH_CHANCES_MARKER) {
            PlacementTone::Success
        } else {
            PlacementTone::Warning
        }
    }
}

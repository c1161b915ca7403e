use serde::{Deserialize, Serialize};

/// Body of `POST /correct`. Only `text` is read; other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectionRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CorrectionRequest {
    /// The text to correct, or `None` when missing, null or blank.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

/// Successful correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResponse {
    pub corrected_text: String,
}

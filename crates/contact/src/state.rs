use strum::{AsRefStr, Display};

use crate::{DraftMessage, FieldName, FieldValidationError};

/// Transient message shown under the form buttons.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    #[strum(serialize = "Message sent!")]
    Sent,
    #[strum(serialize = "Something went wrong.")]
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// True only while a request is in flight.
    pub disabled: bool,
    pub status: Option<StatusMessage>,
}

impl SubmissionState {
    /// Status text as displayed, empty when there is none.
    pub fn status_message(&self) -> &str {
        self.status.as_ref().map(|s| s.as_ref()).unwrap_or_default()
    }
}

/// Everything the contact page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: DraftMessage,
    pub errors: Vec<FieldValidationError>,
    pub submission: SubmissionState,
}

impl ContactForm {
    /// Error messages for one field, in the order the server sent them.
    pub fn errors_for(&self, field: FieldName) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(move |e| e.property_name == field)
            .map(|e| e.error_message.as_str())
    }
}

use serde::{Deserialize, Serialize};

use crate::FieldName;

/// The user's in-progress input. Also the JSON body of the contact request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl DraftMessage {
    /// Returns a new draft with exactly one field replaced.
    pub fn with(self, field: FieldName, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FieldName::Name => Self { name: value, ..self },
            FieldName::Email => Self {
                email: value,
                ..self
            },
            FieldName::Message => Self {
                message: value,
                ..self
            },
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

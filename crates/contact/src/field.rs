use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Form fields the server can attach validation errors to.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

/// One server-reported problem with one field.
///
/// Matches an element of the JSON array returned with a `400`. Keys other
/// than `propertyName` and `errorMessage` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationError {
    pub property_name: FieldName,
    pub error_message: String,
}

impl FieldValidationError {
    pub fn new(property_name: FieldName, error_message: impl Into<String>) -> Self {
        Self {
            property_name,
            error_message: error_message.into(),
        }
    }
}

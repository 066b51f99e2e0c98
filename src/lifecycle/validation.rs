//! Required-field validation and field marks

use crate::state::{Field, FieldMark};
use std::collections::BTreeSet;

/// Result of validating a field set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub invalid_field_names: BTreeSet<String>,
}

impl ValidationResult {
    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid_field_names.contains(name)
    }
}

/// Validate every named field independently.
///
/// A field is invalid iff it is required and blank after trimming. Unnamed
/// fields take no part in validation.
pub fn validate(fields: &[Field]) -> ValidationResult {
    let invalid_field_names: BTreeSet<String> = fields
        .iter()
        .filter(|f| f.has_name() && f.is_violation())
        .map(|f| f.name.clone())
        .collect();

    ValidationResult {
        valid: invalid_field_names.is_empty(),
        invalid_field_names,
    }
}

/// Recompute every field mark from a validation pass
pub fn apply_marks(fields: &mut [Field], result: &ValidationResult) {
    for field in fields.iter_mut().filter(|f| f.has_name()) {
        field.mark = if result.is_invalid(&field.name) {
            FieldMark::Error
        } else if !field.trimmed().is_empty() {
            FieldMark::Success
        } else {
            FieldMark::Neutral
        };
    }
}

/// Mark update while the user is typing: errors clear, filled required fields
/// turn green.
pub fn mark_on_input(field: &mut Field) {
    field.mark = if field.required && !field.trimmed().is_empty() {
        FieldMark::Success
    } else {
        FieldMark::Neutral
    };
}

/// Mark update when focus leaves a field
pub fn mark_on_blur(field: &mut Field) {
    if field.is_violation() {
        field.mark = FieldMark::Error;
    }
}

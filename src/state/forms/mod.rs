//! Form domain layer
//!
//! Field value objects and the two concrete forms.

mod field;
mod form_state;

pub use field::{Field, FieldMark};
pub use form_state::{today, AmtForm, Form, InspectionForm};

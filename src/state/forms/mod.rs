//! Form domain layer
//!
//! Type-safe form handling for the model request form.

mod field;
mod form_state;

pub use field::{FieldValue, FormField, DEFAULT_SIZE_MM};
pub use form_state::{Form, ModelForm};

//! Controlled form components.
//!
//! Each form holds its `contracts` draft in a signal, re-validates on every
//! input, and only shows field errors after the first submit attempt. A
//! valid submit hands the typed record to an injected callback; the forms
//! themselves never decide what a submission means.

pub mod admission;
pub mod contact;
pub mod fields;
pub mod parent_portal;

pub use admission::AdmissionForm;
pub use contact::ContactForm;
pub use parent_portal::ParentPortalForm;

use contracts::forms::FieldErrors;
use leptos::prelude::*;

/// Error signal for one field: hidden until the first submit attempt, then
/// live-updating as the draft changes.
pub fn field_error(
    errors: Memo<FieldErrors>,
    visible: ReadSignal<bool>,
    name: &'static str,
) -> Signal<Option<&'static str>> {
    Signal::derive(move || {
        if visible.get() {
            errors.get().get(name).copied()
        } else {
            None
        }
    })
}

//! Submit/validation status for a single form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::flows::FlowOutcome;

/// Visual state of a login or signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// Mirrors Bootstrap's `was-validated` class: show field feedback.
    pub validated: bool,
    /// Submit button disabled with its busy label while a request runs.
    pub busy: bool,
}

impl FormState {
    /// Local validation failed; show feedback and keep the button enabled.
    pub fn reject(&mut self) {
        self.validated = true;
        self.busy = false;
    }

    /// A request is about to be sent.
    pub fn begin(&mut self) {
        self.busy = true;
    }

    /// Apply a finished flow. The button stays disabled while a navigation
    /// is pending so the form cannot be submitted twice.
    pub fn finish(&mut self, outcome: &FlowOutcome) {
        self.busy = matches!(outcome, FlowOutcome::Navigate(_));
    }

    /// CSS classes for the `<form>` element.
    #[must_use]
    pub fn form_class(self) -> &'static str {
        if self.validated { "needs-validation was-validated" } else { "needs-validation" }
    }
}

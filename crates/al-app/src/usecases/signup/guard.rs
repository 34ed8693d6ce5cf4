use al_core::signup::{SignupEvent, SignupOutcome};
use tracing::warn;

use super::controller::SignupController;

/// Keeps the loading flag bound to the lifetime of one submission.
///
/// `begin` enters `Submitting`; `resolve` publishes the outcome. If the guard
/// is dropped unresolved (the submitting future was dropped) the submission
/// is recorded as interrupted, so the flag never stays set.
pub(crate) struct SubmissionGuard<'a> {
    controller: &'a SignupController,
    resolved: bool,
}

impl<'a> SubmissionGuard<'a> {
    pub(crate) fn begin(controller: &'a SignupController) -> Self {
        controller.dispatch(SignupEvent::Begin);
        Self {
            controller,
            resolved: false,
        }
    }

    pub(crate) fn resolve(mut self, outcome: SignupOutcome) {
        self.resolved = true;
        self.controller.dispatch(SignupEvent::Resolve(outcome));
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            warn!("signup submission ended without an outcome");
            self.controller.dispatch(SignupEvent::Interrupt);
        }
    }
}

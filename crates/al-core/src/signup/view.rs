use crate::signup::state_machine::SignupState;

pub const SUBMIT_LABEL: &str = "Sign Up";
pub const SUBMIT_LABEL_BUSY: &str = "Signing Up...";

/// Presentation projection of the signup state for the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupView {
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

impl SignupView {
    pub fn from_state(state: &SignupState) -> Self {
        if state.is_loading() {
            Self {
                submit_enabled: false,
                submit_label: SUBMIT_LABEL_BUSY,
            }
        } else {
            Self {
                submit_enabled: true,
                submit_label: SUBMIT_LABEL,
            }
        }
    }
}

//! Signup state machine.
//!
//! Pure transition function for one signup screen. Side effects are returned
//! as actions and executed by the controller.

#[cfg(feature = "tracing")]
use tracing::warn;

use crate::ids::UserId;
use crate::signup::form::SignupValidationError;
use crate::signup::outcome::{Alert, SignupOutcome};
use crate::signup::route::Route;

/// Message of the outcome recorded when a submission ends without resolving.
pub const INTERRUPTED_MESSAGE: &str = "Signup was interrupted";

/// Signup flow state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SignupState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Remote calls in flight; the loading flag is set.
    Submitting,
    /// Last attempt created the account and updated the profile.
    Succeeded { user_id: UserId },
    /// Last attempt failed; the outcome says why.
    Failed { outcome: SignupOutcome },
}

impl SignupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SignupState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SignupState::Succeeded { .. } | SignupState::Failed { .. }
        )
    }
}

/// Events that drive the signup flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    /// Validation passed, remote calls are about to start.
    Begin,
    /// Validation failed before any remote call.
    Reject(SignupValidationError),
    /// Remote sequence finished.
    Resolve(SignupOutcome),
    /// The submission ended without resolving (dropped future).
    Interrupt,
    /// Return to the initial state.
    Reset,
}

/// Side effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupAction {
    ShowAlert(Alert),
    /// Replace the current screen with `route`.
    Navigate(Route),
}

/// Pure signup state machine.
pub struct SignupStateMachine;

impl SignupStateMachine {
    pub fn transition(state: SignupState, event: SignupEvent) -> (SignupState, Vec<SignupAction>) {
        match (state, event) {
            (SignupState::Submitting, SignupEvent::Begin) => {
                #[cfg(feature = "tracing")]
                warn!("signup already in flight, ignoring begin");
                (SignupState::Submitting, Vec::new())
            }
            (_, SignupEvent::Begin) => (SignupState::Submitting, Vec::new()),

            (SignupState::Submitting, SignupEvent::Reject(_)) => {
                #[cfg(feature = "tracing")]
                warn!("validation rejection while submitting, ignoring");
                (SignupState::Submitting, Vec::new())
            }
            (_, SignupEvent::Reject(error)) => {
                let outcome = SignupOutcome::ValidationFailed(error);
                let alert = outcome.alert();
                (
                    SignupState::Failed { outcome },
                    vec![SignupAction::ShowAlert(alert)],
                )
            }

            (SignupState::Submitting, SignupEvent::Resolve(outcome)) => {
                let alert = outcome.alert();
                match outcome {
                    SignupOutcome::Success(user_id) => (
                        SignupState::Succeeded { user_id },
                        vec![
                            SignupAction::ShowAlert(alert),
                            SignupAction::Navigate(Route::Login),
                        ],
                    ),
                    outcome => (
                        SignupState::Failed { outcome },
                        vec![SignupAction::ShowAlert(alert)],
                    ),
                }
            }
            (state, SignupEvent::Resolve(_)) => {
                #[cfg(feature = "tracing")]
                warn!(?state, "resolve without submission in flight, ignoring");
                (state, Vec::new())
            }

            (SignupState::Submitting, SignupEvent::Interrupt) => {
                let outcome = SignupOutcome::UnexpectedError(INTERRUPTED_MESSAGE.to_string());
                let alert = outcome.alert();
                (
                    SignupState::Failed { outcome },
                    vec![SignupAction::ShowAlert(alert)],
                )
            }
            (state, SignupEvent::Interrupt) => (state, Vec::new()),

            (_, SignupEvent::Reset) => (SignupState::Idle, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::FormField;

    #[test]
    fn test_begin_from_idle_enters_submitting() {
        let (next, actions) = SignupStateMachine::transition(SignupState::Idle, SignupEvent::Begin);
        assert_eq!(next, SignupState::Submitting);
        assert!(next.is_loading());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_begin_while_submitting_is_ignored() {
        let (next, actions) =
            SignupStateMachine::transition(SignupState::Submitting, SignupEvent::Begin);
        assert_eq!(next, SignupState::Submitting);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_terminal_states_accept_new_submission() {
        let failed = SignupState::Failed {
            outcome: SignupOutcome::RemoteAuthError("taken".into()),
        };
        let succeeded = SignupState::Succeeded {
            user_id: UserId::from("u1"),
        };
        for state in [failed, succeeded] {
            assert!(state.is_terminal());
            let (next, _) = SignupStateMachine::transition(state, SignupEvent::Begin);
            assert_eq!(next, SignupState::Submitting);
        }
    }

    #[test]
    fn test_reject_fails_without_loading() {
        let error = SignupValidationError::MissingFields(vec![FormField::Name]);
        let (next, actions) =
            SignupStateMachine::transition(SignupState::Idle, SignupEvent::Reject(error.clone()));

        assert_eq!(
            next,
            SignupState::Failed {
                outcome: SignupOutcome::ValidationFailed(error)
            }
        );
        assert!(!next.is_loading());
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], SignupAction::ShowAlert(_)));
    }

    #[test]
    fn test_resolve_success_alerts_then_navigates_to_login() {
        let (next, actions) = SignupStateMachine::transition(
            SignupState::Submitting,
            SignupEvent::Resolve(SignupOutcome::Success(UserId::from("u1"))),
        );

        assert_eq!(
            next,
            SignupState::Succeeded {
                user_id: UserId::from("u1")
            }
        );
        assert_eq!(
            actions,
            vec![
                SignupAction::ShowAlert(Alert::new(
                    "Success",
                    crate::signup::outcome::SUCCESS_MESSAGE
                )),
                SignupAction::Navigate(Route::Login),
            ]
        );
    }

    #[test]
    fn test_resolve_failure_alerts_without_navigation() {
        let (next, actions) = SignupStateMachine::transition(
            SignupState::Submitting,
            SignupEvent::Resolve(SignupOutcome::ProfileUpdateError("denied".into())),
        );

        assert!(matches!(next, SignupState::Failed { .. }));
        assert_eq!(
            actions,
            vec![SignupAction::ShowAlert(Alert::new("Signup Error", "denied"))]
        );
    }

    #[test]
    fn test_resolve_outside_submission_is_ignored() {
        let (next, actions) = SignupStateMachine::transition(
            SignupState::Idle,
            SignupEvent::Resolve(SignupOutcome::Success(UserId::from("u1"))),
        );
        assert_eq!(next, SignupState::Idle);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_interrupt_clears_loading_with_unexpected_error() {
        let (next, actions) =
            SignupStateMachine::transition(SignupState::Submitting, SignupEvent::Interrupt);

        assert_eq!(
            next,
            SignupState::Failed {
                outcome: SignupOutcome::UnexpectedError(INTERRUPTED_MESSAGE.to_string())
            }
        );
        assert!(!next.is_loading());
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_interrupt_after_resolution_is_noop() {
        let state = SignupState::Succeeded {
            user_id: UserId::from("u1"),
        };
        let (next, actions) = SignupStateMachine::transition(state.clone(), SignupEvent::Interrupt);
        assert_eq!(next, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let (next, _) = SignupStateMachine::transition(SignupState::Submitting, SignupEvent::Reset);
        assert_eq!(next, SignupState::Idle);
    }
}

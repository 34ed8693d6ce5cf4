use std::sync::{Mutex, MutexGuard};

use al_core::signup::{SignupAction, SignupEvent, SignupForm, SignupState, SignupStateMachine};
use tokio::sync::watch;

/// Per-screen signup context: form fields, published state and dispatch lock.
///
/// ## Lock Ordering
/// Acquire `dispatch_lock` first, then `form`. State lives in a watch
/// channel so it can be committed synchronously, including from `Drop`.
pub(crate) struct SignupContext {
    form: Mutex<SignupForm>,
    state: watch::Sender<SignupState>,
    /// Serializes submissions. Held for the whole remote sequence.
    dispatch_lock: tokio::sync::Mutex<()>,
}

impl SignupContext {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(SignupState::Idle);
        Self {
            form: Mutex::new(SignupForm::default()),
            state,
            dispatch_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Form access; a poisoned lock still yields the last written fields.
    pub(crate) fn form(&self) -> MutexGuard<'_, SignupForm> {
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn state(&self) -> SignupState {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SignupState> {
        self.state.subscribe()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Non-blocking variant; `None` while a submission holds the lock.
    pub(crate) fn try_acquire_dispatch_lock(&self) -> Option<tokio::sync::MutexGuard<'_, ()>> {
        self.dispatch_lock.try_lock().ok()
    }

    /// Compute the next state for `event` without publishing it.
    pub(crate) fn transition(&self, event: SignupEvent) -> (SignupState, Vec<SignupAction>) {
        SignupStateMachine::transition(self.state(), event)
    }

    /// Publish `state`. Only called while holding `dispatch_lock`.
    pub(crate) fn commit(&self, state: SignupState) {
        self.state.send_replace(state);
    }
}

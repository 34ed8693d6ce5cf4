//! Signup controller.
//!
//! Owns the form fields of one signup screen, runs the create-account then
//! update-profile sequence against the auth provider, and reports every
//! terminal outcome through the alert and navigation ports.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use al_core::ports::{AlertPort, AuthProviderError, AuthProviderPort, NavigatorPort, ProfileUpdate};
use al_core::signup::outcome::{MALFORMED_RESPONSE_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
use al_core::signup::state_machine::INTERRUPTED_MESSAGE;
use al_core::signup::{
    Route, SignupAction, SignupEvent, SignupForm, SignupOutcome, SignupRequest, SignupState,
    SignupView,
};
use futures::FutureExt;
use tokio::sync::watch;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::context::SignupContext;
use super::guard::SubmissionGuard;

/// Use case driving the signup screen.
pub struct SignupController {
    context: SignupContext,
    auth: Arc<dyn AuthProviderPort>,
    navigator: Arc<dyn NavigatorPort>,
    alerts: Arc<dyn AlertPort>,
}

impl SignupController {
    pub fn new(
        auth: Arc<dyn AuthProviderPort>,
        navigator: Arc<dyn NavigatorPort>,
        alerts: Arc<dyn AlertPort>,
    ) -> Self {
        Self {
            context: SignupContext::new(),
            auth,
            navigator,
            alerts,
        }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.context.form().name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.context.form().email = email.into();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.context.form().password = al_core::SecretString::new(password.into());
    }

    /// Copy of the current field values.
    pub fn form_snapshot(&self) -> SignupForm {
        self.context.form().snapshot()
    }

    pub fn state(&self) -> SignupState {
        self.context.state()
    }

    pub fn is_loading(&self) -> bool {
        self.context.state().is_loading()
    }

    pub fn view(&self) -> SignupView {
        SignupView::from_state(&self.context.state())
    }

    /// Receiver notified on every published state change.
    pub fn subscribe(&self) -> watch::Receiver<SignupState> {
        self.context.subscribe()
    }

    /// Footer link: open the login screen on top of this one.
    pub fn go_to_login(&self) {
        debug!("navigating to login from signup footer");
        self.navigator.push(Route::Login);
    }

    /// Replace the form with `form` and submit it.
    pub async fn submit_form(&self, form: SignupForm) -> SignupOutcome {
        *self.context.form() = form;
        self.submit().await
    }

    /// Submit button handler. Inert (`None`) while a submission is in flight.
    pub async fn press_submit(&self) -> Option<SignupOutcome> {
        let Some(_dispatch_guard) = self.context.try_acquire_dispatch_lock() else {
            debug!("submit pressed while busy, ignoring");
            return None;
        };
        Some(self.run_submission().await)
    }

    /// Clear the fields and return a finished screen to `Idle`.
    ///
    /// Returns `false` and changes nothing while a submission is in flight.
    pub fn reset(&self) -> bool {
        let Some(_dispatch_guard) = self.context.try_acquire_dispatch_lock() else {
            debug!("reset requested while busy, ignoring");
            return false;
        };
        *self.context.form() = SignupForm::default();
        if self.context.state().is_terminal() {
            self.dispatch(SignupEvent::Reset);
        }
        true
    }

    /// Submit the current form. Concurrent calls are serialized.
    pub async fn submit(&self) -> SignupOutcome {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.run_submission().await
    }

    async fn run_submission(&self) -> SignupOutcome {
        let span = info_span!("usecase.signup.submit", outcome = tracing::field::Empty);
        async {
            info!("signup process started");
            let request = {
                let form = self.context.form();
                debug!(name = %form.name, email = %form.email, "signup form values");
                form.to_request()
            };

            let request = match request {
                Ok(request) => request,
                Err(err) => {
                    warn!(error = %err, "signup validation failed");
                    let outcome = SignupOutcome::ValidationFailed(err.clone());
                    self.dispatch(SignupEvent::Reject(err));
                    tracing::Span::current().record("outcome", outcome.kind());
                    return outcome;
                }
            };

            let guard = SubmissionGuard::begin(self);
            let outcome = match AssertUnwindSafe(self.create_and_update(&request))
                .catch_unwind()
                .await
            {
                Ok(outcome) => outcome,
                Err(payload) => {
                    error!(panic = panic_message(&*payload), "auth provider panicked");
                    SignupOutcome::UnexpectedError(INTERRUPTED_MESSAGE.to_string())
                }
            };
            tracing::Span::current().record("outcome", outcome.kind());
            guard.resolve(outcome.clone());

            info!(outcome = outcome.kind(), "signup process finished");
            outcome
        }
        .instrument(span)
        .await
    }

    async fn create_and_update(&self, request: &SignupRequest) -> SignupOutcome {
        info!("calling auth provider create_account");
        let response = match self
            .auth
            .create_account(&request.email, &request.password)
            .await
        {
            Ok(response) => response,
            Err(AuthProviderError::Transport(err)) => {
                error!(error = %err, "create_account failed in transport");
                return SignupOutcome::UnexpectedError(TRANSPORT_FAILURE_MESSAGE.to_string());
            }
            Err(AuthProviderError::MalformedResponse(err)) => {
                error!(error = %err, "create_account returned malformed response");
                return SignupOutcome::UnexpectedError(MALFORMED_RESPONSE_MESSAGE.to_string());
            }
        };

        if let Some(err) = response.error {
            warn!(
                error = %err.message,
                status = ?err.status,
                code = ?err.code,
                "auth provider rejected account creation"
            );
            return SignupOutcome::RemoteAuthError(err.message);
        }

        let Some(user) = response.user else {
            error!("create_account response carries no user id");
            return SignupOutcome::UnexpectedError(MALFORMED_RESPONSE_MESSAGE.to_string());
        };
        info!(user_id = %user.id, "account created");

        debug!(name = %request.name, "updating profile name");
        let update = ProfileUpdate {
            name: request.name.clone(),
        };
        if let Err(err) = self.auth.update_profile(&user.id, &update).await {
            error!(user_id = %user.id, error = %err, "profile update failed");
            return SignupOutcome::ProfileUpdateError(err.message);
        }
        info!(user_id = %user.id, "profile name updated");

        SignupOutcome::Success(user.id)
    }

    /// Run one state transition: execute its actions, then publish the state.
    ///
    /// Publishing last keeps the loading flag set until the alert and
    /// navigation of a terminal outcome have been issued.
    pub(crate) fn dispatch(&self, event: SignupEvent) {
        let (next, actions) = self.context.transition(event);
        self.execute_actions(actions);
        debug!(state = ?next, "signup state transition");
        self.context.commit(next);
    }

    fn execute_actions(&self, actions: Vec<SignupAction>) {
        for action in actions {
            match action {
                SignupAction::ShowAlert(alert) => self.alerts.show(&alert),
                SignupAction::Navigate(route) => self.navigator.replace(route),
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

use std::sync::Mutex;

use al_core::ports::{
    AuthProviderError, AuthProviderPort, CreateAccountResponse, ProfileUpdate, ProviderError,
};
use al_core::{SecretString, UserId};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};

use super::config::{SupabaseConfig, SupabaseConfigError};
use super::wire::{parse_account_user, provider_error, split_signup_body, SignupBody};

const SIGNUP_PATH: &str = "auth/v1/signup";

/// `AuthProviderPort` backed by a Supabase project.
///
/// The access token of a session issued at signup is kept and used for the
/// profile update, so row-level security sees the new user. Without one the
/// anon key is sent.
pub struct SupabaseAuthProvider {
    http: Client,
    config: SupabaseConfig,
    session_token: Mutex<Option<String>>,
}

impl SupabaseAuthProvider {
    pub fn new(config: SupabaseConfig) -> Result<Self, SupabaseConfigError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SupabaseConfigError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: SupabaseConfig) -> Self {
        Self {
            http,
            config,
            session_token: Mutex::new(None),
        }
    }

    fn bearer_token(&self) -> String {
        self.session_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    fn remember_session(&self, token: Option<String>) {
        *self
            .session_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    async fn read_json(response: Response) -> Result<Option<Value>, reqwest::Error> {
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&text).ok())
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}

#[async_trait]
impl AuthProviderPort for SupabaseAuthProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<CreateAccountResponse, AuthProviderError> {
        let url = self.config.endpoint(SIGNUP_PATH);
        let span = info_span!("infra.supabase.create_account", url = %url);
        async {
            let response = self
                .http
                .post(&url)
                .header("apikey", &self.config.anon_key)
                .bearer_auth(&self.config.anon_key)
                .json(&SignupBody {
                    email,
                    password: password.expose(),
                })
                .send()
                .await
                .map_err(|e| AuthProviderError::Transport(describe(&e)))?;

            let status = response.status();
            debug!(status = status.as_u16(), "signup response received");

            if !status.is_success() {
                let body = Self::read_json(response)
                    .await
                    .map_err(|e| AuthProviderError::Transport(describe(&e)))?;
                let error = provider_error(status, body.as_ref());
                warn!(status = status.as_u16(), error = %error, "signup rejected");
                return Ok(CreateAccountResponse::failed(error));
            }

            let text = response
                .text()
                .await
                .map_err(|e| AuthProviderError::Transport(describe(&e)))?;
            let body: Value = serde_json::from_str(&text)
                .map_err(|e| AuthProviderError::MalformedResponse(format!("invalid JSON: {e}")))?;
            if !body.is_object() {
                return Err(AuthProviderError::MalformedResponse(
                    "signup response is not an object".to_string(),
                ));
            }

            let (user, session_token) = split_signup_body(&body);
            debug!(has_session = session_token.is_some(), "signup body parsed");
            self.remember_session(session_token);

            Ok(CreateAccountResponse {
                user: user.and_then(parse_account_user),
                error: None,
            })
        }
        .instrument(span)
        .await
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        update: &ProfileUpdate,
    ) -> Result<(), ProviderError> {
        let url = self
            .config
            .endpoint(&format!("rest/v1/{}", self.config.profile_table));
        let span = info_span!("infra.supabase.update_profile", url = %url, user_id = %user_id);
        async {
            let response = self
                .http
                .patch(&url)
                .query(&[("id", format!("eq.{}", user_id))])
                .header("apikey", &self.config.anon_key)
                .header("Prefer", "return=minimal")
                .bearer_auth(self.bearer_token())
                .json(update)
                .send()
                .await
                .map_err(|e| ProviderError::new(describe(&e)))?;

            let status = response.status();
            debug!(status = status.as_u16(), "profile update response received");
            if status.is_success() {
                return Ok(());
            }

            let body = Self::read_json(response)
                .await
                .map_err(|e| ProviderError::new(describe(&e)).with_status(status.as_u16()))?;
            Err(provider_error(status, body.as_ref()))
        }
        .instrument(span)
        .await
    }
}

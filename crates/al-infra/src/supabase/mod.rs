//! Supabase auth provider adapter.
//!
//! - account creation: GoTrue `POST /auth/v1/signup`
//! - profile update: PostgREST `PATCH /rest/v1/{table}?id=eq.{user_id}`

mod client;
mod config;
mod wire;

pub use client::SupabaseAuthProvider;
pub use config::{SupabaseConfig, SupabaseConfigError};

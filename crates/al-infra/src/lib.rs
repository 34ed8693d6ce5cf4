//! Infrastructure adapters for Alumo.
//!
//! Currently one adapter: the Supabase-backed implementation of
//! `AuthProviderPort`.

pub mod supabase;

pub use supabase::{SupabaseAuthProvider, SupabaseConfig, SupabaseConfigError};

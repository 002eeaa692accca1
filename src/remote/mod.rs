//! Remote backend functions
//!
//! Webhook payloads are handed to a named function hosted by the backend.
//! [`RemoteFunctions`] is the seam; [`SupabaseFunctions`] talks to a
//! Supabase-style edge function host.

mod supabase;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use supabase::SupabaseFunctions;

/// Invokes named functions on the remote backend
#[async_trait]
pub trait RemoteFunctions: Send + Sync {
    /// Invoke `name` with a JSON body and return its JSON response
    async fn invoke(&self, name: &str, payload: Value) -> Result<Value>;
}

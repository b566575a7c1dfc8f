pub mod gemini;
pub mod local;

use crate::errors::UpstreamError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for completing an assembled prompt
/// with different model backends (the hosted Gemini API, or a local
/// OpenAI-compatible server).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends the assembled prompt and returns the raw completion text.
    ///
    /// A single attempt is made; any failure is surfaced as an
    /// [`UpstreamError`] without retrying.
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

dyn_clone::clone_trait_object!(AiProvider);

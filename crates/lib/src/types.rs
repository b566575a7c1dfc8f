use crate::domain::Domain;
use crate::errors::ConfigError;
use crate::providers::ai::AiProvider;
use crate::templates::PromptStore;
use serde::Serialize;
use std::fmt;

/// A client that answers citizen queries through the configured AI provider.
pub struct AssistClient {
    pub(crate) ai_provider: Box<dyn AiProvider>,
    pub(crate) store: PromptStore,
}

impl fmt::Debug for AssistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistClient")
            .field("ai_provider", &self.ai_provider)
            .finish_non_exhaustive()
    }
}

/// The result of one pass through the pipeline: the domain tag assigned to
/// the query and the formatted reply text.
#[derive(Clone, Debug, Serialize)]
pub struct Answer {
    pub domain: Domain,
    pub text: String,
}

/// A builder for creating `AssistClient` instances.
#[derive(Default)]
pub struct AssistClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    store: Option<PromptStore>,
}

impl AssistClientBuilder {
    /// Creates a new `AssistClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Sets the prompt store.
    pub fn prompt_store(mut self, store: PromptStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the `AssistClient`.
    ///
    /// Consumes the builder and returns a configured client, or a
    /// [`ConfigError`] when a required piece is missing.
    pub fn build(self) -> Result<AssistClient, ConfigError> {
        let ai_provider = self.ai_provider.ok_or(ConfigError::MissingAiProvider)?;
        let store = self.store.ok_or(ConfigError::MissingPromptStore)?;
        Ok(AssistClient { ai_provider, store })
    }
}

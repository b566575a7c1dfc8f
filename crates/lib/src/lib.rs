//! # sahayak
//!
//! This crate routes free-text citizen queries to a hosted model API after
//! light domain classification. Each request is a single linear pass:
//! classify the query, assemble a prompt from the loaded templates, send it
//! through the configured [`providers::ai::AiProvider`], and clean the
//! reply for display. It also carries the coordination modules for
//! volunteer-opportunity matching and impact tracking.

pub mod constants;
pub mod domain;
pub mod errors;
pub mod format;
pub mod handler;
pub mod impact;
pub mod matching;
pub mod prompts;
pub mod providers;
pub mod templates;
pub mod types;
pub mod validation;

pub use domain::{classify, Domain};
pub use errors::{ConfigError, UpstreamError};
pub use templates::PromptStore;
pub use types::{Answer, AssistClient, AssistClientBuilder};

use tracing::{debug, info};

impl AssistClient {
    /// Answers a citizen query.
    ///
    /// Runs the full pipeline: classification, prompt assembly, one
    /// upstream call, response cleanup. Classification never fails;
    /// unmatched queries are answered under [`Domain::Other`].
    pub async fn answer(&self, query: &str) -> Result<Answer, UpstreamError> {
        let domain = domain::classify(query);
        info!("[answer] classified query as `{domain}`");

        let prompt = handler::build_prompt(&self.store, domain, query);
        debug!(prompt = %prompt, "--> sending assembled prompt upstream");

        let raw = self.ai_provider.generate(&prompt).await?;
        debug!("<-- raw reply: {raw}");

        Ok(Answer {
            domain,
            text: format::clean_response(&raw),
        })
    }
}

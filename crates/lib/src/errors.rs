use std::io;
use thiserror::Error;

/// Errors raised while assembling the startup configuration.
///
/// These are fatal: the binaries print the message and exit before any
/// network call is attempted.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("failed to read prompt template `{path}`: {source}")]
    TemplateRead { path: String, source: io::Error },
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("no AI provider configured")]
    MissingAiProvider,
    #[error("no prompt store configured")]
    MissingPromptStore,
}

/// Errors raised by a call to the upstream model API.
///
/// A call is attempted exactly once; failures are surfaced to the caller
/// without retrying.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Failed to send request to the model API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize the model API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("The model API returned an error: {0}")]
    Api(String),
    #[error("The model API response contained no candidates")]
    EmptyResponse,
}

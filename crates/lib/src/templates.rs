//! Loading and holding the prompt template files.

use crate::constants::{BASE_PROMPT_FILE, SAFETY_RULES_FILE};
use crate::errors::ConfigError;
use crate::prompts::core::{DEFAULT_BASE_PROMPT, DEFAULT_SAFETY_RULES};
use std::fs;
use std::path::Path;
use tracing::info;

/// The immutable prompt templates, loaded once at process start.
///
/// The store is read-only after construction and can be shared freely
/// across requests.
#[derive(Clone, Debug)]
pub struct PromptStore {
    base_prompt: String,
    safety_rules: String,
}

impl PromptStore {
    /// Loads the two template files from `dir`.
    ///
    /// Both `base_prompt.txt` and `safety_rules.txt` must exist; a missing
    /// or unreadable file is a fatal [`ConfigError::TemplateRead`].
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let base_prompt = read_template(&dir.join(BASE_PROMPT_FILE))?;
        let safety_rules = read_template(&dir.join(SAFETY_RULES_FILE))?;
        info!("loaded prompt templates from {}", dir.display());
        Ok(Self {
            base_prompt,
            safety_rules,
        })
    }

    /// A store backed by the compiled-in default templates.
    pub fn builtin() -> Self {
        Self {
            base_prompt: DEFAULT_BASE_PROMPT.to_string(),
            safety_rules: DEFAULT_SAFETY_RULES.to_string(),
        }
    }

    pub fn base_prompt(&self) -> &str {
        &self.base_prompt
    }

    pub fn safety_rules(&self) -> &str {
        &self.safety_rules
    }
}

fn read_template(path: &Path) -> Result<String, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::TemplateRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text.trim_end().to_string())
}
